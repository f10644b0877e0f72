use sawa_pricing::{
    calculate_final_price, format_price_breakdown, resolve_commission, round2, AgencyDefaults,
    CommissionOverrides, CommissionRates, HostType, PriceBreakdown,
};

#[test]
fn test_positive_sawa_override_always_applies() {
    let defaults = AgencyDefaults::new(Some(20.0), Some(5.0));
    for host in [HostType::Agency, HostType::Freelancer] {
        for agency_defaults in [None, Some(&defaults)] {
            for sawa in [0.5, 10.0, 28.0, 99.0] {
                let overrides = CommissionOverrides::new(Some(sawa), None);
                let rates = resolve_commission(host, Some(&overrides), agency_defaults);
                assert_eq!(rates.sawa_percent, sawa);
            }
        }
    }
}

#[test]
fn test_agency_profile_defaults_fallback() {
    let defaults = AgencyDefaults::new(Some(20.0), Some(5.0));
    assert_eq!(
        resolve_commission(HostType::Agency, None, Some(&defaults)),
        CommissionRates::new(20.0, 5.0)
    );
}

#[test]
fn test_agency_fixed_fallback() {
    assert_eq!(
        resolve_commission(HostType::Agency, None, None),
        CommissionRates::new(28.0, 7.0)
    );
}

#[test]
fn test_freelancer_fallback() {
    assert_eq!(
        resolve_commission(HostType::Freelancer, None, None),
        CommissionRates::new(35.0, 0.0)
    );
}

#[test]
fn test_unknown_host_type_prices_as_freelancer() {
    let host = HostType::from("travel-guide");
    assert_eq!(
        resolve_commission(host, None, Some(&AgencyDefaults::new(Some(10.0), None))),
        CommissionRates::new(35.0, 0.0)
    );
}

#[test]
fn test_total_consistency() {
    let overrides = CommissionOverrides::new(Some(17.5), Some(3.25));
    let defaults = AgencyDefaults::new(Some(22.0), Some(6.5));
    let bases = [0.0, 0.01, 0.05, 9.99, 33.33, 74.5, 100.0, 249.99, 1000.01, -12.34];

    for base in bases {
        for host in [HostType::Agency, HostType::Freelancer] {
            for (o, d) in [
                (None, None),
                (Some(&overrides), None),
                (None, Some(&defaults)),
                (Some(&overrides), Some(&defaults)),
            ] {
                let b = calculate_final_price(base, host, o, d);
                assert_eq!(b.total, round2(b.base_price + b.sawa_fee + b.office_fee));
                assert_eq!(b.sawa_fee, round2(base * b.sawa_percent / 100.0));
                assert_eq!(b.office_fee, round2(base * b.office_percent / 100.0));
            }
        }
    }
}

#[test]
fn test_formatter_omits_zero_office_line() {
    let breakdown = PriceBreakdown {
        base_price: 100.0,
        sawa_percent: 35.0,
        sawa_fee: 35.0,
        office_percent: 0.0,
        office_fee: 0.0,
        total: 135.0,
    };
    let text = format_price_breakdown(Some(&breakdown), None);
    assert_eq!(text.split('\n').count(), 3);
    assert!(!text.contains("Office"));
}

#[test]
fn test_formatter_includes_office_line_in_order() {
    let breakdown = PriceBreakdown {
        base_price: 100.0,
        sawa_percent: 28.0,
        sawa_fee: 28.0,
        office_percent: 7.0,
        office_fee: 7.0,
        total: 135.0,
    };
    let text = format_price_breakdown(Some(&breakdown), Some("$"));
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "Host services: $100.00",
            "SAWA (28%): $28.00",
            "Office (7%): $7.00",
            "Total: $135.00",
        ]
    );
}

#[test]
fn test_freelancer_booking_scenario() {
    let b = calculate_final_price(200.0, HostType::Freelancer, None, None);
    assert_eq!(
        b,
        PriceBreakdown {
            base_price: 200.0,
            sawa_percent: 35.0,
            sawa_fee: 70.0,
            office_percent: 0.0,
            office_fee: 0.0,
            total: 270.0,
        }
    );
}

#[test]
fn test_agency_with_profile_defaults_scenario() {
    let defaults = AgencyDefaults::new(Some(25.0), Some(5.0));
    let b = calculate_final_price(150.0, HostType::Agency, None, Some(&defaults));
    assert_eq!(
        b,
        PriceBreakdown {
            base_price: 150.0,
            sawa_percent: 25.0,
            sawa_fee: 37.5,
            office_percent: 5.0,
            office_fee: 7.5,
            total: 195.0,
        }
    );
}

#[test]
fn test_malformed_base_price_scenario() {
    let b = calculate_final_price("abc", HostType::Agency, None, None);
    assert_eq!(b.base_price, 0.0);
    assert_eq!(b.sawa_fee, 0.0);
    assert_eq!(b.office_fee, 0.0);
    assert_eq!(b.total, 0.0);
}

#[test]
fn test_concurrent_quotes_agree() {
    let expected = calculate_final_price(123.45, HostType::Agency, None, None);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| calculate_final_price(123.45, HostType::Agency, None, None)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
