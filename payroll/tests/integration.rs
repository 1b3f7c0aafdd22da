use covenant_core::{tokens, Address};
use payroll::{PayrollError, Registry};

fn setup() -> Registry {
    let mut registry = Registry::new();
    registry.create_company(
        &Address::from("founder"),
        "Covenant Solutions".to_string(),
        "Software development".to_string(),
        "https://covenant.example".to_string(),
        vec![
            "CEO".to_string(),
            "CTO".to_string(),
            "Founder".to_string(),
        ],
        "Ada".to_string(),
        "CEO".to_string(),
        0,
    );
    registry
}

#[test]
fn test_payroll_run_over_ten_seconds() {
    let mut registry = setup();
    let founder = Address::from("founder");

    for (wallet, name, role) in [("alice", "Alice", "Developer"), ("bob", "Bob", "Designer")] {
        registry
            .hire_employee(
                &founder,
                0,
                Address::from(wallet),
                name.to_string(),
                role.to_string(),
                tokens(1),
                "USD".to_string(),
                100,
            )
            .unwrap();
    }

    // 10 seconds of work at 1 token/second each
    let owed = registry.accrued(0, 110).unwrap();
    let total: u128 = owed.iter().map(|(_, amount)| amount).sum();
    assert_eq!(total, tokens(20));

    registry.settle(&founder, 0, 110).unwrap();

    // Nothing further accrues without elapsed time
    let owed = registry.accrued(0, 110).unwrap();
    assert!(owed.iter().all(|(_, amount)| *amount == 0));
}

#[test]
fn test_second_company_ids_sequential() {
    let mut registry = setup();
    let id = registry.create_company(
        &Address::from("other"),
        "Other Corp".to_string(),
        "Consulting".to_string(),
        "https://other.example".to_string(),
        vec!["CEO".to_string()],
        "Grace".to_string(),
        "CEO".to_string(),
        50,
    );
    assert_eq!(id, 1);
    assert_eq!(registry.company_count(), 2);

    // Ownership checks are per-company
    let result = registry.add_company_role(&Address::from("founder"), 1, "CTO".to_string());
    assert!(matches!(result, Err(PayrollError::NotCompanyOwner { .. })));
}
