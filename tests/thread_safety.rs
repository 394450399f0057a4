mod common;

use common::asserts::{assert_accepted, assert_rejected};
use common::builders::{policy, request};
use common::headers::header_value;
use cors_gate::constants::header;
use std::sync::Arc;
use std::thread;

#[test]
fn policy_can_be_shared_across_threads() {
    let hosts: Vec<String> = (0..8).map(|i| format!("thread{}.example", i)).collect();
    let policy = Arc::new(
        policy()
            .origins(hosts.clone())
            .credentials(true)
            .allow_headers(["X-Thread"])
            .build(),
    );

    let mut handles = Vec::new();
    for host in hosts {
        let policy = Arc::clone(&policy);
        handles.push(thread::spawn(move || {
            let origin = format!("https://{}", host);
            for _ in 0..100 {
                let headers = assert_accepted(request().origin(origin.as_str()).evaluate(&policy));

                assert_eq!(
                    header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                    Some(origin.as_str()),
                );
                assert_eq!(
                    header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
                    Some("X-Thread"),
                );

                assert_rejected(
                    request()
                        .origin(format!("https://not-{}", host))
                        .evaluate(&policy),
                );
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
