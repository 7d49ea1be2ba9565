use cursive::views::{Button, TextView};
use cursive::Cursive;

use crate::config::Config;
use crate::modules::widget::models::FormEvent;
use crate::modules::widget::services::{ViewSnapshot, WidgetSession};

use super::{theme, views};

/// Run the calculator until the user quits.
///
/// The session lives in Cursive's user data; every callback funnels
/// through [`dispatch`], so the views never hold state of their own.
pub fn run(config: &Config) {
    let session = WidgetSession::new(config.display.currency_label.as_str());
    let snapshot = session.snapshot();

    let mut siv = cursive::default();
    siv.set_user_data(session);
    siv.set_theme(theme::theme_for(snapshot.mode));
    siv.add_layer(views::form_dialog(&snapshot, &config.display.contact_email));
    siv.add_global_callback('q', |siv| siv.quit());

    tracing::info!("form ready");
    siv.run();
    tracing::info!("form closed");
}

/// Route one user event through the session, then repaint derived views.
pub(crate) fn dispatch(siv: &mut Cursive, event: FormEvent) {
    let theme_changed = matches!(event, FormEvent::ThemeToggled);

    let Some(snapshot) = siv.with_user_data(|session: &mut WidgetSession| {
        session.handle(event);
        session.snapshot()
    }) else {
        return;
    };

    refresh(siv, &snapshot, theme_changed);
}

fn refresh(siv: &mut Cursive, snapshot: &ViewSnapshot, theme_changed: bool) {
    siv.call_on_name(views::FEE_VALUE, |view: &mut TextView| {
        view.set_content(snapshot.fee_text.clone());
    });
    siv.call_on_name(views::NET_VALUE, |view: &mut TextView| {
        view.set_content(snapshot.net_text.clone());
    });
    siv.call_on_name(views::PRICE_HINT, |view: &mut TextView| {
        view.set_content(snapshot.hint_text);
    });

    if theme_changed {
        siv.call_on_name(views::THEME_BUTTON, |button: &mut Button| {
            button.set_label(snapshot.theme_label);
        });
        siv.set_theme(theme::theme_for(snapshot.mode));
    }
}
