use serde_json::json;
use xio_collector::xtremio::types::*;

#[test]
fn test_deserialize_cluster_with_string_counters() {
    let json = json!({
        "content": {
            "name": "xbrick1",
            "size-and-capacity": "1X20TB",
            "sys-psnt-serial-number": "CKM00151700123",
            "sys-sw-version": "4.0.25-27",
            "ud-ssd-space": "15707178312",
            "ud-ssd-space-in-use": "7853589156",
            "num-of-bricks": "1"
        },
        "links": [{"href": "https://xms/api/json/v2/types/clusters/1", "rel": "self"}]
    });

    let response: ClusterResponse =
        serde_json::from_value(json).expect("Failed to parse ClusterResponse");
    let cluster = response.content;
    assert_eq!(cluster.size_and_capacity, "1X20TB");
    assert_eq!(cluster.serial_number, "CKM00151700123");
    assert_eq!(cluster.sw_version, "4.0.25-27");
    assert_eq!(cluster.ud_ssd_space, 15707178312.0);
    assert_eq!(cluster.ud_ssd_space_in_use, 7853589156.0);
}

#[test]
fn test_deserialize_cluster_with_numeric_counters() {
    let json = json!({
        "content": {
            "size-and-capacity": "2X40TB",
            "sys-psnt-serial-number": "CKM2",
            "sys-sw-version": "6.3.0",
            "ud-ssd-space": 1073741824u64,
            "ud-ssd-space-in-use": 0
        }
    });

    let response: ClusterResponse = serde_json::from_value(json).expect("Failed to parse");
    assert_eq!(response.content.ud_ssd_space, 1073741824.0);
    assert_eq!(response.content.ud_ssd_space_in_use, 0.0);
}

#[test]
fn test_missing_content_is_rejected() {
    let err = serde_json::from_value::<ClusterResponse>(json!({"message": "Not found"}))
        .unwrap_err();
    assert!(err.to_string().contains("content"));
}

#[test]
fn test_non_numeric_counter_is_rejected() {
    let json = json!({
        "content": {
            "size-and-capacity": "1X10TB",
            "sys-psnt-serial-number": "CKM1",
            "sys-sw-version": "4.0.2",
            "ud-ssd-space": "lots",
            "ud-ssd-space-in-use": "0"
        }
    });

    let err = serde_json::from_value::<ClusterResponse>(json).unwrap_err();
    assert!(err.to_string().contains("lots"));
}

#[test]
fn test_null_serial_is_rejected() {
    let json = json!({
        "content": {
            "size-and-capacity": "1X10TB",
            "sys-psnt-serial-number": null,
            "sys-sw-version": "4.0.2",
            "ud-ssd-space": "1",
            "ud-ssd-space-in-use": "0"
        }
    });

    assert!(serde_json::from_value::<ClusterResponse>(json).is_err());
}
