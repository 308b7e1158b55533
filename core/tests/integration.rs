//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port in a background thread,
//! then drives the client over real HTTP through `UreqExecutor`. This checks
//! that form encoding, headers, envelope handling and binding agree with an
//! actual server.

use std::collections::BTreeMap;
use std::time::Duration;

use cufinder_core::{
    ClientConfig, CseParams, CufError, Cufinder, CufParams, LbsParams, PseParams, RetryPolicy,
    Transport,
};

const KEY: &str = "test-key";

/// Start the mock server and return its base URL.
fn start_server() -> String {
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
            cufinder_mock_server::run(listener, KEY).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(KEY)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(0)
}

fn quick_retries(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
        backoff_multiplier: 2.0,
    }
}

#[test]
fn company_lookups() {
    let client = Cufinder::with_config(&config(&start_server()));

    let cuf = client.cuf("TechCorp", "US").unwrap();
    assert_eq!(cuf.domain, "techcorp.com");
    assert_eq!(cuf.query, "TechCorp");
    assert_eq!(cuf.credit_count, 1);
    assert_eq!(cuf.confidence_level, 0);

    let lcuf = client.lcuf("TechCorp").unwrap();
    assert_eq!(lcuf.linkedin_url, "https://linkedin.com/company/techcorp");

    assert_eq!(client.dtc("techcorp.com").unwrap().company_name, "TechCorp");
    assert_eq!(client.dte("techcorp.com").unwrap().emails.len(), 2);
    assert_eq!(client.ntp("TechCorp").unwrap().phones, vec!["+1-555-0100"]);
}

#[test]
fn people_lookups() {
    let client = Cufinder::with_config(&config(&start_server()));

    let rel = client.rel("john@techcorp.com").unwrap();
    assert_eq!(rel.person.full_name, "John Doe");
    assert_eq!(rel.person.linkedin_followers, "1.2K");

    let epp = client.epp("https://linkedin.com/in/johndoe").unwrap();
    assert_eq!(epp.person.linkedin_url, "https://linkedin.com/in/johndoe");
    assert_eq!(epp.person.linkedin_followers, 1200);
    assert_eq!(epp.confidence_level, 88);
    assert_eq!(epp.meta_data["source"], "mock");

    let fwe = client.fwe("https://linkedin.com/in/johndoe").unwrap();
    assert_eq!(fwe.work_email, "john.doe@techcorp.com");

    let tep = client.tep("John Doe", "TechCorp").unwrap();
    assert_eq!(tep.person.full_name, "John Doe");
    assert_eq!(tep.person.company_name, "TechCorp");
    assert_eq!(tep.query["company"], "TechCorp");
}

#[test]
fn company_intelligence() {
    let client = Cufinder::with_config(&config(&start_server()));

    let fcl = client.fcl("techcorp").unwrap();
    assert_eq!(fcl.companies.len(), 2);
    assert_eq!(fcl.companies[0].company_type, "Private");
    assert_eq!(fcl.companies[0].employee_count, 120);

    let elf = client.elf("techcorp").unwrap();
    assert_eq!(elf.fundraising.funding_last_round_type, "Series A");

    assert_eq!(client.car("techcorp").unwrap().revenue, "$10M-$50M");
    assert_eq!(client.fcc("techcorp").unwrap().subsidiaries.len(), 2);
    assert!(client
        .fts("techcorp")
        .unwrap()
        .technologies
        .contains(&"Rust".to_string()));

    let enc = client.enc("techcorp").unwrap();
    assert_eq!(enc.company.name, "TechCorp");
    assert_eq!(enc.company.company_type, "Public");

    let cec = client.cec("techcorp").unwrap();
    assert_eq!(cec.countries["US"], 120);

    let clo = client.clo("techcorp").unwrap();
    assert_eq!(clo.locations[0].city, "San Francisco");
}

#[test]
fn searches() {
    let client = Cufinder::with_config(&config(&start_server()));

    let cse = client
        .cse(&CseParams {
            industry: "software".to_string(),
            country: "US".to_string(),
            products_services: vec!["cloud".to_string(), "ai".to_string()],
            ..CseParams::default()
        })
        .unwrap();
    assert_eq!(cse.companies[0].industry, "software");
    assert_eq!(cse.companies[0].employees.count, 150);
    assert_eq!(cse.query["products_services"], "cloud,ai");

    let pse = client
        .pse(&PseParams {
            job_title_role: "engineering".to_string(),
            ..PseParams::default()
        })
        .unwrap();
    assert_eq!(pse.peoples[0].current_job.role, "engineering");

    let lbs = client.lbs(&LbsParams::default()).unwrap();
    assert_eq!(lbs.companies[0].name, "Corner Cafe");
    assert_eq!(lbs.query, serde_json::json!({}));
}

#[test]
fn website_analysis() {
    let client = Cufinder::with_config(&config(&start_server()));

    assert_eq!(client.bcd("techcorp.com").unwrap().customers, vec!["Acme", "Globex"]);
    assert_eq!(
        client.ccp("techcorp.com").unwrap().careers_page_url,
        "https://techcorp.com/careers"
    );
    assert_eq!(client.isc("techcorp.com").unwrap().is_saas, "yes");
    assert_eq!(client.cbc("techcorp.com").unwrap().business_type, "B2B");
    assert_eq!(
        client.csc("techcorp.com").unwrap().mission_statement,
        "Make data useful."
    );
}

#[test]
fn wrong_api_key_surfaces_401() {
    let config = ClientConfig::new("wrong-key")
        .with_base_url(start_server())
        .with_max_retries(0);
    let err = Cufinder::with_config(&config).cuf("TechCorp", "US").unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().starts_with("CUF service error: API error: status 401"));
}

#[test]
fn not_found_keeps_raw_body() {
    let client = Cufinder::with_config(&config(&start_server()));
    let err = client.car("unknown").unwrap_err();

    match err.root() {
        CufError::Api { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, r#"{"error":"no result"}"#);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn server_error_is_not_decoded() {
    let transport = Transport::new(&config(&start_server()));
    let err = transport
        .send("/boom", &BTreeMap::<String, String>::new())
        .unwrap_err();

    match err {
        CufError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_json_success_is_a_decode_error() {
    let transport = Transport::new(&config(&start_server()));
    let err = transport
        .send("/garbage", &BTreeMap::<String, String>::new())
        .unwrap_err();
    assert!(matches!(err, CufError::Decode(_)), "{err}");
}

#[test]
fn timeout_is_a_network_error() {
    let config = config(&start_server()).with_timeout(Duration::from_millis(200));
    let transport = Transport::new(&config);
    let err = transport
        .send("/slow", &BTreeMap::from([("ms", "2000")]))
        .unwrap_err();
    assert!(matches!(err, CufError::Network(_)), "{err}");
}

#[test]
fn transient_failures_are_retried() {
    let transport =
        Transport::new(&config(&start_server())).with_retry_policy(quick_retries(3));
    let object = transport
        .send("/flaky", &BTreeMap::<String, String>::new())
        .unwrap();
    assert_eq!(object["attempt"], 3);
}

#[test]
fn retries_stop_at_the_configured_count() {
    let transport =
        Transport::new(&config(&start_server())).with_retry_policy(quick_retries(1));
    let err = transport
        .send("/flaky", &BTreeMap::<String, String>::new())
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[test]
fn concurrent_calls_do_not_mix_bodies() {
    let transport = Transport::new(&config(&start_server()));

    std::thread::scope(|scope| {
        for i in 0..8 {
            let transport = &transport;
            scope.spawn(move || {
                for round in 0..5 {
                    let name = format!("Company {i}-{round}");
                    let params = CufParams::new(name.clone(), format!("C{i}"));
                    let echoed = transport.send("/echo", &params).unwrap();
                    assert_eq!(echoed["company_name"], name.as_str());
                    assert_eq!(echoed["country_code"], format!("C{i}").as_str());
                    assert_eq!(echoed.len(), 2);
                }
            });
        }
    });
}

#[test]
fn independent_clients_keep_their_own_keys() {
    let base_url = start_server();
    let good = Cufinder::with_config(&config(&base_url));
    let bad = Cufinder::with_config(&ClientConfig::new("other").with_base_url(&base_url).with_max_retries(0));

    assert!(good.cuf("TechCorp", "US").is_ok());
    assert_eq!(bad.cuf("TechCorp", "US").unwrap_err().status(), Some(401));
    assert!(good.dtc("techcorp.com").is_ok());
}
