use super::*;

fn stats() -> DashboardStats {
    DashboardStats {
        users_total: 12_847,
        sessions_active: 312,
        revenue_cents: 4_820_950,
        growth_pct: 4.2,
    }
}

#[test]
fn stat_cards_formats_every_tile() {
    let cards = stat_cards(&stats());
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0], ("Total users", "12,847".to_owned(), None));
    assert_eq!(cards[1], ("Active sessions", "312".to_owned(), None));
    assert_eq!(cards[2], ("Revenue", "$48,209.50".to_owned(), None));
    assert_eq!(
        cards[3],
        ("Growth", "+4.2%".to_owned(), Some("vs last month".to_owned()))
    );
}

#[test]
fn stat_cards_renders_negative_growth_with_sign() {
    let mut s = stats();
    s.growth_pct = -1.5;
    let cards = stat_cards(&s);
    assert_eq!(cards[3].1, "-1.5%");
}
