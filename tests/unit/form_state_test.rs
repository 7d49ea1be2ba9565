// End-to-end widget behavior through the session layer
//
// Each test drives a WidgetSession with user events and checks the derived
// snapshot: the rendered fee and net lines, the placeholder hint, and the
// theme button label.

use feeform::modules::widget::{FormEvent, ThemeMode, WidgetSession};
use proptest::prelude::*;

fn new_session() -> WidgetSession {
    WidgetSession::new("SP")
}

#[test]
fn test_initial_snapshot_shows_nan_and_light_mode() {
    let snapshot = new_session().snapshot();

    assert_eq!(snapshot.fee_text, "NaN SP");
    assert_eq!(snapshot.net_text, "NaN SP");
    assert_eq!(snapshot.hint_text, "Enter an amount.");
    assert_eq!(snapshot.mode, ThemeMode::Light);
    assert_eq!(snapshot.theme_label, "Switch to dark mode");
    assert!(!snapshot.buff_active);
    assert!(!snapshot.voucher_active);
}

#[test]
fn test_price_entry_renders_fee_and_net() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("1000".into()));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.fee_text, "100 SP");
    assert_eq!(snapshot.net_text, "900 SP");
    assert_eq!(snapshot.hint_text, "");
}

#[test]
fn test_each_discount_lowers_the_fee() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("1000".into()));

    session.handle(FormEvent::BuffToggled);
    assert_eq!(session.snapshot().fee_text, "90 SP");
    assert_eq!(session.snapshot().net_text, "910 SP");

    session.handle(FormEvent::BuffToggled);
    session.handle(FormEvent::VoucherToggled);
    assert_eq!(session.snapshot().fee_text, "70 SP");
    assert_eq!(session.snapshot().net_text, "930 SP");
}

#[test]
fn test_both_discounts_select_the_combined_policy() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("1000".into()));
    session.handle(FormEvent::BuffToggled);
    session.handle(FormEvent::VoucherToggled);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.fee_text, "60 SP");
    assert_eq!(snapshot.net_text, "940 SP");
    assert!(snapshot.buff_active);
    assert!(snapshot.voucher_active);
}

#[test]
fn test_clearing_the_price_returns_to_nan() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("1000".into()));
    session.handle(FormEvent::PriceEdited(String::new()));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.fee_text, "NaN SP");
    assert_eq!(snapshot.net_text, "NaN SP");
    assert_eq!(snapshot.hint_text, "Enter an amount.");
}

#[test]
fn test_unparseable_text_renders_nan_without_hint() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("abc".into()));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.fee_text, "NaN SP");
    assert_eq!(snapshot.net_text, "NaN SP");
    assert_eq!(snapshot.hint_text, "");
}

#[test]
fn test_theme_toggle_changes_nothing_but_the_theme() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("1000".into()));
    session.handle(FormEvent::BuffToggled);
    let before = session.snapshot();

    session.handle(FormEvent::ThemeToggled);
    let after = session.snapshot();

    assert_eq!(after.mode, ThemeMode::Dark);
    assert_eq!(after.theme_label, "Switch to light mode");
    assert_eq!(after.fee_text, before.fee_text);
    assert_eq!(after.net_text, before.net_text);
    assert_eq!(after.buff_active, before.buff_active);
    assert_eq!(after.voucher_active, before.voucher_active);

    session.handle(FormEvent::ThemeToggled);
    assert_eq!(session.snapshot().mode, ThemeMode::Light);
    assert_eq!(session.snapshot().theme_label, "Switch to dark mode");
}

#[test]
fn test_discounts_persist_across_price_edits() {
    let mut session = new_session();
    session.handle(FormEvent::BuffToggled);
    session.handle(FormEvent::PriceEdited("1000".into()));
    assert_eq!(session.snapshot().fee_text, "90 SP");

    session.handle(FormEvent::PriceEdited("500".into()));
    assert_eq!(session.snapshot().fee_text, "45 SP");
}

#[test]
fn test_fractional_price_is_floored_before_quoting() {
    let mut session = new_session();
    session.handle(FormEvent::PriceEdited("12.7".into()));

    // floor(12.7) = 12, so the quote is on 12
    let snapshot = session.snapshot();
    assert_eq!(snapshot.fee_text, "1.2 SP");
    assert_eq!(snapshot.net_text, "10.8 SP");
}

#[test]
fn test_custom_currency_label() {
    let mut session = WidgetSession::new("G");
    session.handle(FormEvent::PriceEdited("1000".into()));

    assert_eq!(session.snapshot().fee_text, "100 G");
}

proptest! {
    #[test]
    fn test_toggles_always_invert(flips in 1usize..20) {
        let mut session = new_session();
        for _ in 0..flips {
            session.handle(FormEvent::BuffToggled);
        }

        prop_assert_eq!(session.snapshot().buff_active, flips % 2 == 1);
    }

    #[test]
    fn test_snapshot_is_a_pure_function_of_state(
        price in 0i64..1_000_000i64,
        buff in any::<bool>(),
        voucher in any::<bool>()
    ) {
        let mut session = new_session();
        session.handle(FormEvent::PriceEdited(price.to_string()));
        if buff {
            session.handle(FormEvent::BuffToggled);
        }
        if voucher {
            session.handle(FormEvent::VoucherToggled);
        }

        prop_assert_eq!(session.snapshot(), session.snapshot());
    }
}
