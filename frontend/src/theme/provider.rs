use std::rc::Rc;

use log::info;
use yew::prelude::*;

use super::manager::BrowserThemeManager;
use super::mode::ThemeMode;
use super::palette::ThemeConfig;

/// What every section can read about the current theme.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub config: Rc<ThemeConfig>,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    // The manager owns the mode; this component only re-renders when it changes.
    // Starting it here publishes the stored mode before the first paint.
    let manager = use_memo(
        |_| {
            let manager = BrowserThemeManager::browser();
            manager.start();
            manager
        },
        (),
    );
    let redraw = use_force_update();

    let mode = manager.mode();
    let config = use_memo(|mode: &ThemeMode| ThemeConfig::for_mode(*mode), mode);

    let toggle = {
        let manager = manager.clone();
        Callback::from(move |_| {
            let next = manager.toggle();
            info!("Switched theme to {}", next);
            redraw.force_update();
        })
    };

    let context = ThemeContext {
        mode,
        config: config.clone(),
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <style>{config.css_variables()}</style>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeContext>();
    let Some(theme) = theme else {
        return html! {};
    };

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .theme-toggle-floating {
                        position: fixed;
                        top: 1.25rem;
                        right: 1.25rem;
                        z-index: 100;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: 1px solid rgba(196, 155, 141, 0.4);
                        background: var(--color-surface);
                        color: var(--color-text);
                        font-size: 1.2rem;
                        cursor: pointer;
                        backdrop-filter: blur(8px);
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .theme-toggle-floating:hover {
                        transform: scale(1.08);
                        box-shadow: var(--shadow-hover);
                    }
                "#}
            </style>
            <button
                class="theme-toggle-floating"
                title={theme.mode.toggle_label()}
                aria-label={theme.mode.toggle_label()}
                onclick={onclick}
            >
                { theme.mode.toggle_icon() }
            </button>
        </>
    }
}
