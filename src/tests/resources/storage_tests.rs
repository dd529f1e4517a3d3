use super::{client_responding, is_schema_error};
use crate::{
    ArrayState, DiskStatus, DiskType, ParityCheckStatus,
    operations::{ARRAY_QUERY, DISKS_QUERY, PARITY_CHECK_QUERY, SHARES_QUERY},
};

fn data_disk(name: &str, id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "status": status,
        "temp": 34,
        "fsSize": 11_718_885_324_u64,
        "fsFree": 3_906_250_000_u64,
        "fsUsed": 7_812_635_324_u64,
        "fsType": "xfs",
        "type": "DATA",
        "id": id,
        "isSpinning": true
    })
}

#[tokio::test]
async fn test_shares_success() {
    let client = client_responding(
        SHARES_QUERY,
        None,
        serde_json::json!({
            "shares": [
                {
                    "name": "appdata",
                    "free": 412_316_860_416_u64,
                    "used": 21_474_836_480_u64,
                    "size": 0,
                    "allocator": "highwater",
                    "floor": "0"
                },
                {
                    "name": "media",
                    "free": "8000000000",
                    "used": "4000000000",
                    "size": "12000000000",
                    "allocator": "mostfree",
                    "floor": "52428800"
                }
            ]
        }),
    );

    let shares = client.query_shares().await.unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "appdata");
    assert_eq!(shares[0].free, 412_316_860_416);
    assert_eq!(shares[0].allocator, "highwater");
    assert_eq!(shares[1].size, 12_000_000_000);
    assert_eq!(shares[1].floor, "52428800");
}

#[tokio::test]
async fn test_disks_are_merged_in_order() {
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({
            "array": {
                "disks": [
                    data_disk("disk1", "d1", "DISK_OK"),
                    data_disk("disk2", "d2", "DISK_DSBL")
                ],
                "caches": [{
                    "name": "cache",
                    "status": "DISK_OK",
                    "temp": 41,
                    "fsSize": 976_762_584_u64,
                    "fsFree": 500_000_000_u64,
                    "fsUsed": 476_762_584_u64,
                    "type": "CACHE",
                    "id": "c1",
                    "isSpinning": true
                }],
                "parities": [
                    {
                        "name": "parity",
                        "status": "DISK_OK",
                        "temp": null,
                        "type": "PARITY",
                        "id": "p1",
                        "isSpinning": false
                    },
                    {
                        "name": "parity2",
                        "status": "DISK_NP",
                        "temp": null,
                        "type": "PARITY",
                        "id": "p2",
                        "isSpinning": false
                    }
                ]
            }
        }),
    );

    let disks = client.query_disks().await.unwrap();
    assert_eq!(disks.len(), 2 + 1 + 2);

    let ids: Vec<_> = disks.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["d1", "d2", "c1", "p1", "p2"]);

    let disk1 = &disks[0];
    assert_eq!(disk1.status, DiskStatus::DiskOk);
    assert_eq!(disk1.disk_type, DiskType::Data);
    assert_eq!(disk1.temp, Some(34));
    assert_eq!(disk1.fs_size, Some(11_718_885_324));
    assert_eq!(disk1.fs_free, Some(3_906_250_000));
    assert_eq!(disk1.fs_used, Some(7_812_635_324));
    assert!(disk1.is_spinning);
    assert_eq!(disk1.vendor, None);
    assert_eq!(disk1.smart_status, None);

    assert_eq!(disks[1].status, DiskStatus::DiskDsbl);
    assert_eq!(disks[2].disk_type, DiskType::Cache);
    assert!(disks[2].has_filesystem());

    for parity in &disks[3..] {
        assert_eq!(parity.disk_type, DiskType::Parity);
        assert_eq!(parity.fs_size, None);
        assert_eq!(parity.fs_free, None);
        assert_eq!(parity.fs_used, None);
        assert!(!parity.has_filesystem());
        assert_eq!(parity.temp, None);
    }
    assert_eq!(disks[4].status, DiskStatus::DiskNp);
}

#[tokio::test]
async fn test_disks_with_null_filesystem_values() {
    // A spun-down or unmountable data disk reports nulls.
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({
            "array": {
                "disks": [{
                    "name": "disk3",
                    "status": "DISK_NP_MISSING",
                    "temp": null,
                    "fsSize": null,
                    "fsFree": null,
                    "fsUsed": null,
                    "type": "DATA",
                    "id": "d3",
                    "isSpinning": false
                }],
                "caches": [],
                "parities": []
            }
        }),
    );

    let disks = client.query_disks().await.unwrap();
    assert_eq!(disks.len(), 1);
    assert_eq!(disks[0].status, DiskStatus::DiskNpMissing);
    assert_eq!(disks[0].temp, None);
    assert!(!disks[0].has_filesystem());
}

#[tokio::test]
async fn test_disks_accept_quoted_numbers() {
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({
            "array": {
                "disks": [],
                "caches": [{
                    "name": "cache",
                    "status": "DISK_OK",
                    "temp": "41",
                    "fsSize": "100",
                    "fsFree": "40",
                    "fsUsed": "60",
                    "type": "CACHE",
                    "id": "c1",
                    "isSpinning": false
                }],
                "parities": [{
                    "name": "parity",
                    "status": "DISK_OK",
                    "temp": "36",
                    "type": "PARITY",
                    "id": "p1",
                    "isSpinning": true
                }]
            }
        }),
    );

    let disks = client.query_disks().await.unwrap();
    assert_eq!(disks[0].temp, Some(41));
    assert_eq!(disks[0].fs_size, Some(100));
    assert_eq!(disks[0].fs_used, Some(60));
    assert_eq!(disks[1].temp, Some(36));
    assert_eq!(disks[1].fs_size, None);
}

#[tokio::test]
async fn test_disks_non_numeric_temperature_is_rejected() {
    let mut disk = data_disk("disk1", "d1", "DISK_OK");
    disk["temp"] = serde_json::json!("hot");
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({ "array": { "disks": [disk], "caches": [], "parities": [] } }),
    );

    let err = client.query_disks().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
}

#[tokio::test]
async fn test_disks_empty_array() {
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({ "array": { "disks": [], "caches": [], "parities": [] } }),
    );

    assert!(client.query_disks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_disks_every_status_round_trips() {
    let disks: Vec<_> = DiskStatus::ALL
        .iter()
        .enumerate()
        .map(|(i, status)| data_disk(&format!("disk{}", i), &format!("d{}", i), status.as_str()))
        .collect();
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({ "array": { "disks": disks, "caches": [], "parities": [] } }),
    );

    let mapped = client.query_disks().await.unwrap();
    let statuses: Vec<_> = mapped.iter().map(|d| d.status).collect();
    assert_eq!(statuses, DiskStatus::ALL);
}

#[tokio::test]
async fn test_disks_unknown_status_is_rejected() {
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({
            "array": {
                "disks": [data_disk("disk1", "d1", "DISK_SLEEPING")],
                "caches": [],
                "parities": []
            }
        }),
    );

    let err = client.query_disks().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
    assert!(err.to_string().contains("DISK_SLEEPING"), "{}", err);
}

#[tokio::test]
async fn test_disks_missing_list_is_rejected() {
    let client = client_responding(
        DISKS_QUERY,
        None,
        serde_json::json!({ "array": { "disks": [], "caches": [] } }),
    );

    let err = client.query_disks().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
}

#[tokio::test]
async fn test_array_success() {
    let client = client_responding(
        ARRAY_QUERY,
        None,
        serde_json::json!({
            "array": {
                "state": "STARTED",
                "capacity": {
                    "kilobytes": {
                        "free": "23437500000",
                        "used": "15625000000",
                        "total": "39062500000"
                    }
                }
            }
        }),
    );

    let array = client.query_array().await.unwrap();
    assert_eq!(array.state, ArrayState::Started);
    assert_eq!(array.capacity_free, 23_437_500_000);
    assert_eq!(array.capacity_used, 15_625_000_000);
    assert_eq!(array.capacity_total, 39_062_500_000);
}

#[tokio::test]
async fn test_array_every_state_round_trips() {
    for state in ArrayState::ALL {
        let client = client_responding(
            ARRAY_QUERY,
            None,
            serde_json::json!({
                "array": {
                    "state": state.as_str(),
                    "capacity": { "kilobytes": { "free": 1, "used": 2, "total": 3 } }
                }
            }),
        );
        assert_eq!(client.query_array().await.unwrap().state, state);
    }
}

#[tokio::test]
async fn test_array_unknown_state_is_rejected() {
    let client = client_responding(
        ARRAY_QUERY,
        None,
        serde_json::json!({
            "array": {
                "state": "MAINTENANCE",
                "capacity": { "kilobytes": { "free": 1, "used": 2, "total": 3 } }
            }
        }),
    );

    let err = client.query_array().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
}

#[tokio::test]
async fn test_parity_check_never_run() {
    let client = client_responding(
        PARITY_CHECK_QUERY,
        None,
        serde_json::json!({
            "array": {
                "parityCheckStatus": {
                    "status": "NEVER_RUN",
                    "progress": null,
                    "errors": null,
                    "speed": null,
                    "duration": null,
                    "correcting": null,
                    "paused": false,
                    "running": false
                }
            }
        }),
    );

    let pc = client.query_parity_check().await.unwrap();
    assert_eq!(pc.status, ParityCheckStatus::NeverRun);
    assert_eq!(pc.progress, None);
    assert_eq!(pc.errors, None);
    assert_eq!(pc.speed, None);
    assert_eq!(pc.duration, None);
    assert_eq!(pc.correcting, None);
    assert!(!pc.running);
    assert!(!pc.paused);
}

#[tokio::test]
async fn test_parity_check_optional_fields_may_be_absent() {
    let client = client_responding(
        PARITY_CHECK_QUERY,
        None,
        serde_json::json!({
            "array": {
                "parityCheckStatus": { "status": "NEVER_RUN", "paused": false, "running": false }
            }
        }),
    );

    let pc = client.query_parity_check().await.unwrap();
    assert_eq!(pc.progress, None);
    assert_eq!(pc.correcting, None);
}

#[tokio::test]
async fn test_parity_check_running() {
    let client = client_responding(
        PARITY_CHECK_QUERY,
        None,
        serde_json::json!({
            "array": {
                "parityCheckStatus": {
                    "status": "RUNNING",
                    "progress": "42",
                    "errors": 0,
                    "speed": "187.3",
                    "duration": 15230,
                    "correcting": true,
                    "paused": false,
                    "running": true
                }
            }
        }),
    );

    let pc = client.query_parity_check().await.unwrap();
    assert_eq!(pc.status, ParityCheckStatus::Running);
    assert_eq!(pc.progress, Some(42));
    assert_eq!(pc.errors, Some(0));
    assert_eq!(pc.speed.as_deref(), Some("187.3"));
    assert_eq!(pc.duration, Some(15230));
    assert_eq!(pc.correcting, Some(true));
    assert!(pc.running);
    assert!(!pc.paused);
}

#[tokio::test]
async fn test_parity_check_requires_running_flag() {
    let client = client_responding(
        PARITY_CHECK_QUERY,
        None,
        serde_json::json!({
            "array": { "parityCheckStatus": { "status": "PAUSED", "paused": true } }
        }),
    );

    let err = client.query_parity_check().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
}
