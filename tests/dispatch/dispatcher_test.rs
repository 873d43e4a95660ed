// Dispatcher Tests
// The (operation, arguments) entry point never panics and always answers

use drugchain::dispatch::{Dispatcher, Status};
use drugchain::ledger::{ErrorKind, LedgerService};
use drugchain::storage::SledStore;
use tempfile::TempDir;

fn open_dispatcher(temp_dir: &TempDir) -> Dispatcher<SledStore> {
    Dispatcher::new(LedgerService::new(SledStore::open(temp_dir.path()).unwrap()))
}

const CREATE_A1: [&str; 8] = [
    "A1",
    "ReddyLabs",
    "1/2018",
    "paracetamol",
    "100",
    "01/01/2020",
    "ReddyLabs",
    "Manufacturer",
];

const NO_ARGS: [&str; 0] = [];

#[test]
fn test_create_has_no_payload() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);

    let response = dispatcher.invoke("createAsset", &CREATE_A1);

    assert!(response.is_ok());
    assert_eq!(response.status(), Status::Ok);
    assert!(response.payload().is_none());
    assert!(response.error().is_none());
}

#[test]
fn test_history_payload() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);
    dispatcher.invoke("createAsset", &CREATE_A1);
    dispatcher.invoke("transferOwnership", &["A1", "Distro1"]);

    let response = dispatcher.invoke("getAssetHistory", &["A1"]);

    let json: serde_json::Value = serde_json::from_slice(response.payload().unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_operation() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);

    let response = dispatcher.invoke("deleteAsset", &["A1"]);

    assert_eq!(response.status(), Status::Error);
    assert_eq!(response.error_kind(), Some(ErrorKind::UnknownOperation));
    assert!(response.error().unwrap().message.contains("deleteAsset"));
}

#[test]
fn test_legacy_names_route() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);

    assert!(dispatcher.invoke("initLedger", &NO_ARGS).is_ok());
    assert!(dispatcher.invoke("changeAssetOwner", &["ASSET0", "Distro1"]).is_ok());

    let response = dispatcher.invoke("getItemHistory", &["ASSET0"]);
    let json: serde_json::Value = serde_json::from_slice(response.payload().unwrap()).unwrap();
    assert_eq!(json[1]["Value"]["Owner"], "Distro1");
}

#[test]
fn test_error_kinds_reach_caller() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);

    let count = dispatcher.invoke("createAsset", &["A1", "ReddyLabs"]);
    assert_eq!(count.error_kind(), Some(ErrorKind::ArgumentCountError));

    let mut bad_quantity = CREATE_A1;
    bad_quantity[4] = "ten";
    let format = dispatcher.invoke("createAsset", &bad_quantity);
    assert_eq!(format.error_kind(), Some(ErrorKind::ArgumentFormatError));

    let missing = dispatcher.invoke("transferOwnership", &["A1", "Distro1"]);
    assert_eq!(missing.error_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn test_query_through_dispatcher() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);
    dispatcher.invoke("seedLedger", &NO_ARGS);

    let response = dispatcher.invoke("queryAsset", &["ASSET3"]);

    let json: serde_json::Value = serde_json::from_slice(response.payload().unwrap()).unwrap();
    assert_eq!(json["AssetId"], "ASSET3");
}

#[test]
fn test_response_json_document() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = open_dispatcher(&temp_dir);

    let ok = dispatcher.invoke("createAsset", &CREATE_A1).to_json();
    assert_eq!(ok["status"], "Ok");
    assert!(ok["payload"].is_null());
    assert!(ok["error"].is_null());

    let err = dispatcher.invoke("queryAsset", &["nope"]).to_json();
    assert_eq!(err["status"], "Error");
    assert_eq!(err["error"]["kind"], "NotFound");

    let history = dispatcher.invoke("getAssetHistory", &["A1"]).to_json();
    assert_eq!(history["payload"][0]["Value"]["AssetId"], "A1");
}
