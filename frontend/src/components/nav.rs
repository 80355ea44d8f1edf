use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::Locale;
use crate::motion::Motion;
use crate::Route;

/// Mobile menu flag. Plain state so it can be reasoned about without a DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        MenuState { open: !self.open }
    }

    pub fn closed(self) -> Self {
        MenuState { open: false }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let copy = props.locale.copy();
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // No prevent_default: the browser still follows the #anchor.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    let burger_class = classes!("burger-menu", menu.is_open().then(|| "open"));
    let switch_to = Route::Localized { locale: props.locale.other().tag().to_string() };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo" style={Motion::slide(-30).duration(600).on_mount()}>
                    {copy.brand}
                </a>

                <div class="nav-desktop">
                    {
                        copy.nav.items.iter().enumerate().map(|(index, item)| html! {
                            <a
                                key={item.anchor}
                                href={format!("#{}", item.anchor)}
                                class="nav-link"
                                style={Motion::rise(-20).duration(600).stagger(index, 100).on_mount()}
                            >
                                {item.label}
                            </a>
                        }).collect::<Html>()
                    }
                    <Link<Route> to={switch_to.clone()} classes="nav-locale">
                        {copy.nav.switch_label}
                    </Link<Route>>
                </div>

                <button
                    class={burger_class}
                    onclick={toggle_menu}
                    aria-label={copy.nav.menu_label}
                    aria-expanded={menu.is_open().to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="nav-mobile" style={Motion::rise(-20).duration(300).on_mount()}>
                            {
                                copy.nav.items.iter().map(|item| html! {
                                    <a
                                        key={item.anchor}
                                        href={format!("#{}", item.anchor)}
                                        class="nav-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {item.label}
                                    </a>
                                }).collect::<Html>()
                            }
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={switch_to} classes="nav-locale">
                                    {copy.nav.switch_label}
                                </Link<Route>>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(226, 232, 240, 0.5);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 80px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1e293b;
                    text-decoration: none;
                }
                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link, .nav-locale {
                    color: #475569;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .nav-locale:hover {
                    color: #2563eb;
                }
                .nav-locale {
                    font-size: 0.875rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 9999px;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    width: 40px;
                    height: 40px;
                    padding: 8px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    height: 2px;
                    width: 24px;
                    background: #1e293b;
                    transition: all 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }
                .nav-mobile {
                    display: none;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(226, 232, 240, 0.5);
                }
                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .nav-mobile {
                        display: flex;
                    }
                    .nav-mobile .nav-locale {
                        display: inline-block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_and_round_trips() {
        let menu = MenuState::default();
        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), menu);
    }

    #[test]
    fn link_click_closes_an_open_menu() {
        let open = MenuState::default().toggled();
        assert!(!open.closed().is_open());
    }

    #[test]
    fn closing_a_closed_menu_is_a_no_op() {
        let menu = MenuState::default();
        assert_eq!(menu.closed(), menu);
    }
}
