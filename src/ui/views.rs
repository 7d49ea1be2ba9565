use cursive::traits::{Nameable, Resizable};
use cursive::views::{
    Button, Checkbox, Dialog, DummyView, EditView, LinearLayout, ListView, Panel, TextView,
};

use crate::modules::widget::models::FormEvent;
use crate::modules::widget::services::ViewSnapshot;

use super::app;

// Names used to look views up after construction.
pub const PRICE_FIELD: &str = "price_field";
pub const PRICE_HINT: &str = "price_hint";
pub const FEE_VALUE: &str = "fee_value";
pub const NET_VALUE: &str = "net_value";
pub const THEME_BUTTON: &str = "theme_button";

const SALE_AMOUNT_LABEL: &str = "Sale amount";
const FEE_LABEL: &str = "Fee";
const BUFF_LABEL: &str = "10% transaction fee discount buff";
const VOUCHER_LABEL: &str = "30% transaction fee discount voucher";
const NET_AMOUNT_LABEL: &str = "Amount received";
const INFO_HEADING: &str = "Bug reports and suggestions:";

/// Build the calculator card from the session's initial snapshot.
///
/// Rows follow the form's reading order: price entry, the computed fee,
/// the two discount toggles, then the net amount. Every input routes its
/// event through [`app::dispatch`], which repaints the derived rows.
pub fn form_dialog(snapshot: &ViewSnapshot, contact_email: &str) -> impl cursive::View {
    let form = ListView::new()
        .child(
            SALE_AMOUNT_LABEL,
            EditView::new()
                .on_edit(|siv, text, _cursor| {
                    app::dispatch(siv, FormEvent::PriceEdited(text.to_string()));
                })
                .with_name(PRICE_FIELD)
                .fixed_width(16),
        )
        .child("", TextView::new(snapshot.hint_text).with_name(PRICE_HINT))
        .delimiter()
        .child(
            FEE_LABEL,
            TextView::new(snapshot.fee_text.as_str()).with_name(FEE_VALUE),
        )
        .delimiter()
        .child(
            BUFF_LABEL,
            Checkbox::new().on_change(|siv, _checked| {
                app::dispatch(siv, FormEvent::BuffToggled);
            }),
        )
        .child(
            VOUCHER_LABEL,
            Checkbox::new().on_change(|siv, _checked| {
                app::dispatch(siv, FormEvent::VoucherToggled);
            }),
        )
        .delimiter()
        .child(
            NET_AMOUNT_LABEL,
            TextView::new(snapshot.net_text.as_str()).with_name(NET_VALUE),
        );

    let theme_button = Button::new(snapshot.theme_label, |siv| {
        app::dispatch(siv, FormEvent::ThemeToggled);
    })
    .with_name(THEME_BUTTON);

    let info_card = Panel::new(
        LinearLayout::vertical()
            .child(TextView::new(INFO_HEADING))
            .child(TextView::new(format!("Email: {contact_email}"))),
    );

    Dialog::around(
        LinearLayout::vertical()
            .child(form)
            .child(DummyView.fixed_height(1))
            .child(theme_button)
            .child(DummyView.fixed_height(1))
            .child(info_card),
    )
    .title("Transaction fee calculator")
    .button("Quit", |siv| siv.quit())
    .max_width(64)
}
