use yew::prelude::*;

use crate::theme::Theme;
use crate::utils::Modal;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let theme_link = |label: &'static str, theme: Option<Theme>| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            Theme::apply(theme);
        });
        html! {
            <li><a href="#" {onclick}>{label}</a></li>
        }
    };

    html! {
        <Modal>
            <dialog id="settings" open={props.open}>
                <article>
                    <h2>{"Settings"}</h2>
                    <ul>
                        { theme_link("Auto", None) }
                        { theme_link("Light", Some(Theme::Light)) }
                        { theme_link("Dark", Some(Theme::Dark)) }
                    </ul>
                </article>
            </dialog>
        </Modal>
    }
}
