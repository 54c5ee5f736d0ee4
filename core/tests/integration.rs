//! Full account lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP through the default pooled transport: health,
//! create (including the duplicate conflict), fetch, list with every
//! pagination selector, and versioned delete with its stale-version error
//! path.

use account_core::{
    Account, AccountClient, AccountStatus, ApiError, Attributes, Config, CountryCode, Currency,
    PageNumber,
};
use uuid::Uuid;

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn sample_account(organisation_id: Uuid) -> Account {
    let mut attributes = Attributes::new("GB".parse::<CountryCode>().unwrap());
    attributes.base_currency = Some(Currency::new("GBP").unwrap());
    attributes.account_number = Some("41426819".to_string());
    attributes.bank_id = Some("400300".to_string());
    attributes.bank_id_code = Some("GBDSC".to_string());
    attributes.bic = Some("NWBKGB22".to_string());
    attributes.name = vec!["Samantha Holder".to_string()];
    attributes.status = AccountStatus::Confirmed;
    Account::new(Uuid::new_v4(), organisation_id, attributes)
}

#[test]
fn account_lifecycle() {
    let addr = start_server();
    let client = AccountClient::new(Config::new(format!("http://{addr}")));
    let organisation_id = Uuid::new_v4();

    // Step 1: the service is up and the store starts empty.
    assert!(client.health(), "expected the mock server to be healthy");
    let accounts = client.list(None, None).unwrap();
    assert!(accounts.is_empty(), "expected empty list");

    // Step 2: create an account; the server assigns version 0 and echoes
    // every attribute back unchanged.
    let record = sample_account(organisation_id);
    let created = client.create(&record).unwrap();
    assert_eq!(created.id, record.id);
    assert_eq!(created.organisation_id, organisation_id);
    assert_eq!(created.version, 0);
    assert_eq!(created.attributes, record.attributes);

    // Step 3: creating the same id again is a server-side conflict.
    let err = client.create(&record).unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 409, .. }), "got {err:?}");

    // Step 4: fetch reproduces the created record.
    let fetched = client.fetch(record.id).unwrap();
    assert_eq!(fetched, created);

    // Step 5: two more accounts for pagination.
    let second = client.create(&sample_account(organisation_id)).unwrap();
    let third = client.create(&sample_account(organisation_id)).unwrap();

    let all = client.list(None, None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, created.id, "server order is insertion order");

    let first_page = client.list(Some(PageNumber::First), Some(2)).unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[1].id, second.id);

    let last_page = client.list(Some(PageNumber::Last), Some(2)).unwrap();
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].id, third.id);

    let numbered = client.list(Some(PageNumber::Number(1)), Some(2)).unwrap();
    assert_eq!(numbered.len(), 1);

    // A page past the end is an empty list, not an error.
    let past_the_end = client.list(Some(PageNumber::Number(7)), Some(2)).unwrap();
    assert!(past_the_end.is_empty());

    // Step 6: invalid pagination fails locally, before any request.
    let err = client.list(Some(PageNumber::Number(-1)), None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument { .. }));
    let err = client.list(None, Some(0)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument { .. }));

    // Step 7: delete needs the current version.
    let err = client.delete(record.id, 9).unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 409, .. }), "got {err:?}");
    client.delete(record.id, created.version).unwrap();

    // Step 8: the deleted account is gone, the others remain.
    let err = client.fetch(record.id).unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 404, .. }), "got {err:?}");
    let remaining = client.list(None, None).unwrap();
    assert_eq!(remaining.len(), 2);

    // Step 9: still healthy after the error paths.
    assert!(client.health());
}
