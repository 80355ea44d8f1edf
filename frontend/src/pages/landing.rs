use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::Nav;
use crate::hooks::use_section_reveal;
use crate::i18n::{Accent, Locale, SiteCopy, PRACTICE};
use crate::motion::Motion;
use crate::reveal::Section;

const HEART_ICON: &str = "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z";
const CHECK_ICON: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const PHONE_ICON: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const MAIL_ICON: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const PIN_ICON: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z";
const PIN_DOT_ICON: &str = "M15 11a3 3 0 11-6 0 3 3 0 016 0z";

fn icon(paths: &[&'static str]) -> Html {
    html! {
        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            { for paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
            }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub locale: Locale,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let copy = props.locale.copy();
    let (reveal, refs) = use_section_reveal();

    // Keep <html lang> and the tab title in step with the route
    {
        let locale = props.locale;
        use_effect_with_deps(
            move |locale: &Locale| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(root) = document.document_element() {
                        let _ = root.set_attribute("lang", locale.tag());
                    }
                    document.set_title(locale.copy().page_title);
                }
                || ()
            },
            locale,
        );
    }

    let hero_in = reveal.is_revealed(Section::Hero);
    let about_in = reveal.is_revealed(Section::About);
    let services_in = reveal.is_revealed(Section::Services);
    let contact_in = reveal.is_revealed(Section::Contact);

    html! {
        <div class="practice-page">
            <Nav locale={props.locale} />

            // Hero
            <section ref={refs.hero.clone()} data-reveal={Section::Hero.id()} class="hero">
                <div class="hero-background" style={format!("background-image: url('{}');", PRACTICE.hero_image)}>
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content" style={Motion::rise(80).duration(1000).style(hero_in)}>
                    <h1 class="hero-title">
                        <span>{copy.hero.title_lead}</span>
                        <span class="gradient-text">{copy.hero.title_accent}</span>
                    </h1>
                    <p class="hero-subtitle" style={Motion::rise(30).delay(300).style(hero_in)}>
                        {copy.hero.subtitle}
                    </p>
                    <div class="hero-cta-group" style={Motion::rise(30).delay(600).style(hero_in)}>
                        <a href="#contact" class="button-primary">{copy.hero.primary_cta}</a>
                        <a href="#about" class="button-ghost">{copy.hero.secondary_cta}</a>
                    </div>
                </div>
                <div class="scroll-indicator" style={Motion::fade().delay(1200).style(hero_in)}>
                    <div class="scroll-indicator-dot"></div>
                </div>
            </section>

            <About copy={copy} revealed={about_in} section_ref={refs.about.clone()} />
            <Services copy={copy} revealed={services_in} section_ref={refs.services.clone()} />
            // Credentials follow the services latch, they sit right below it
            <Credentials copy={copy} revealed={services_in} />

            // Contact
            <section id="contact" ref={refs.contact.clone()} data-reveal={Section::Contact.id()} class="section section-dark">
                <div class="container">
                    <div class="section-header" style={Motion::rise(60).style(contact_in)}>
                        <h2>{copy.contact.heading}</h2>
                        <p>{copy.contact.subheading}</p>
                    </div>
                    <div class="two-columns">
                        <div class="contact-details" style={Motion::slide(-60).delay(200).style(contact_in)}>
                            <div class="glass-card">
                                <h3>{copy.contact.info_heading}</h3>
                                <div class="contact-row">
                                    <div class="contact-icon accent-blue">{icon(&[PHONE_ICON])}</div>
                                    <div>
                                        <p class="contact-label">{copy.contact.phone_label}</p>
                                        <p class="contact-value">{PRACTICE.phone}</p>
                                    </div>
                                </div>
                                <div class="contact-row">
                                    <div class="contact-icon accent-teal">{icon(&[MAIL_ICON])}</div>
                                    <div>
                                        <p class="contact-label">{copy.contact.email_label}</p>
                                        <p class="contact-value">{PRACTICE.email}</p>
                                    </div>
                                </div>
                                <div class="contact-row">
                                    <div class="contact-icon accent-purple">{icon(&[PIN_ICON, PIN_DOT_ICON])}</div>
                                    <div>
                                        <p class="contact-label">{copy.contact.office_label}</p>
                                        <p class="contact-value">
                                            {PRACTICE.address_lines[0]}<br />{PRACTICE.address_lines[1]}
                                        </p>
                                    </div>
                                </div>
                            </div>
                            <div class="glass-card">
                                <h3>{copy.contact.hours_heading}</h3>
                                <div class="office-hours">
                                    { for copy.contact.hours.iter().map(|line| html! { <p>{*line}</p> }) }
                                    <p class="office-hours-note">{copy.contact.emergency_note}</p>
                                </div>
                            </div>
                        </div>
                        <div class="glass-card" style={Motion::slide(60).delay(400).style(contact_in)}>
                            <h3>{copy.contact.form.heading}</h3>
                            <ContactForm locale={props.locale} />
                        </div>
                    </div>
                </div>
            </section>

            <Footer copy={copy} />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                @keyframes motion-enter {
                    from {
                        opacity: 0;
                        transform: translate(var(--motion-x, 0px), var(--motion-y, 0px));
                    }
                    to {
                        opacity: 1;
                        transform: translate(0px, 0px);
                    }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                .practice-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff);
                    color: #334155;
                }
                .practice-page section {
                    scroll-margin-top: 80px;
                }
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section {
                    padding: 5rem 0;
                }
                .section-white {
                    background: #ffffff;
                }
                .section-tinted {
                    background: linear-gradient(135deg, #f8fafc, #eff6ff);
                }
                .section-dark {
                    background: linear-gradient(135deg, #1e293b, #1e3a8a);
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-header h2 {
                    font-size: 2.75rem;
                    font-weight: 700;
                    color: #1e293b;
                    margin: 0 0 1.5rem;
                }
                .section-header p {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .section-dark .section-header h2 {
                    color: #ffffff;
                }
                .section-dark .section-header p {
                    color: #e2e8f0;
                }
                .two-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #ffffff;
                }
                .accent-blue {
                    background: linear-gradient(135deg, #3b82f6, #2563eb);
                }
                .accent-teal {
                    background: linear-gradient(135deg, #14b8a6, #0d9488);
                }
                .accent-purple {
                    background: #a855f7;
                }
                .bullet-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .bullet-list li {
                    display: flex;
                    align-items: center;
                    color: #334155;
                }
                .bullet-list li::before {
                    content: "";
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    margin-right: 0.75rem;
                    background: var(--bullet, #3b82f6);
                    flex-shrink: 0;
                }
                .bullet-list.accent-teal-bullets li::before {
                    --bullet: #14b8a6;
                }
                .button-primary, .button-ghost {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    font-size: 1.125rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    border: none;
                    text-align: center;
                }
                .button-primary {
                    background: linear-gradient(90deg, #2563eb, #1d4ed8);
                    color: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                }
                .button-primary:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                }
                .button-ghost {
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }
                .button-ghost:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(15, 23, 42, 0.7), rgba(30, 58, 138, 0.6), rgba(30, 41, 59, 0.7));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 1280px;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.15;
                    color: #ffffff;
                    margin: 0 0 2rem;
                }
                .hero-title span {
                    display: block;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #60a5fa, #2dd4bf);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #e2e8f0;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: calc(50% - 12px);
                    width: 24px;
                    height: 40px;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                    box-sizing: border-box;
                }
                .scroll-indicator-dot {
                    width: 4px;
                    height: 12px;
                    margin-top: 8px;
                    background: rgba(255, 255, 255, 0.6);
                    border-radius: 9999px;
                    animation: bounce 1s infinite;
                }

                .portrait {
                    position: relative;
                }
                .portrait-frame {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    z-index: 1;
                }
                .portrait-frame img {
                    display: block;
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                }
                .blob {
                    position: absolute;
                    border-radius: 9999px;
                    opacity: 0.2;
                }
                .blob-top {
                    top: -1.5rem;
                    right: -1.5rem;
                    width: 6rem;
                    height: 6rem;
                    background: linear-gradient(135deg, #60a5fa, #2dd4bf);
                }
                .blob-bottom {
                    bottom: -1.5rem;
                    left: -1.5rem;
                    width: 8rem;
                    height: 8rem;
                    background: linear-gradient(135deg, #c084fc, #f472b6);
                }
                .about-text p {
                    font-size: 1.125rem;
                    line-height: 1.75;
                    color: #334155;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .highlight-card, .credential-card {
                    background: #f8fafc;
                    border: 1px solid rgba(226, 232, 240, 0.5);
                }
                .highlight-card {
                    border-radius: 0.75rem;
                    padding: 1rem;
                }
                .highlight-card h4 {
                    margin: 0 0 0.25rem;
                    color: #1e293b;
                }
                .highlight-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .service-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .service-card {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    border: 1px solid rgba(226, 232, 240, 0.5);
                    transition: box-shadow 0.3s ease;
                }
                .service-card:hover {
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .service-card-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .service-card-header h3 {
                    font-size: 1.5rem;
                    color: #1e293b;
                    margin: 0;
                }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 1rem;
                }
                .service-icon .icon {
                    width: 2rem;
                    height: 2rem;
                }
                .service-card img {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .service-card p {
                    color: #475569;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .credential-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .credential-card {
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .credential-card h3 {
                    font-size: 1.25rem;
                    color: #1e293b;
                    margin: 0 0 1rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .glass-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border-radius: 1rem;
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .glass-card h3 {
                    font-size: 1.5rem;
                    color: #ffffff;
                    margin: 0 0 1.5rem;
                }
                .contact-row {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 1rem;
                    flex-shrink: 0;
                }
                .contact-label {
                    color: #e2e8f0;
                    margin: 0;
                }
                .contact-value {
                    color: #ffffff;
                    font-weight: 600;
                    margin: 0;
                }
                .office-hours p {
                    color: #e2e8f0;
                    margin: 0 0 0.5rem;
                }
                .office-hours .office-hours-note {
                    font-size: 0.875rem;
                    margin-top: 1rem;
                }

                .site-footer {
                    background: #0f172a;
                    color: #ffffff;
                    padding: 3rem 0;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .footer-grid h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .footer-grid h4 {
                    font-size: 1.125rem;
                    margin: 0 0 1rem;
                }
                .footer-grid p, .footer-grid li, .footer-grid a {
                    color: #94a3b8;
                    text-decoration: none;
                }
                .footer-grid a:hover {
                    color: #ffffff;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-bottom {
                    border-top: 1px solid #1e293b;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    text-align: center;
                    color: #94a3b8;
                }

                @media (max-width: 1024px) {
                    .two-columns, .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                    .section-header h2 {
                        font-size: 2.25rem;
                    }
                    .credential-grid, .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .highlight-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RevealSectionProps {
    copy: &'static SiteCopy,
    revealed: bool,
    #[prop_or_default]
    section_ref: NodeRef,
}

#[function_component(About)]
fn about(props: &RevealSectionProps) -> Html {
    let about = &props.copy.about;
    let revealed = props.revealed;

    html! {
        <section id="about" ref={props.section_ref.clone()} data-reveal={Section::About.id()} class="section section-white">
            <div class="container">
                <div class="section-header" style={Motion::rise(60).style(revealed)}>
                    <h2>{about.heading}</h2>
                    <p>{about.subheading}</p>
                </div>
                <div class="two-columns">
                    <div class="portrait" style={Motion::slide(-60).delay(200).style(revealed)}>
                        <div class="portrait-frame">
                            <img src={PRACTICE.portrait_image} alt={about.portrait_alt} />
                        </div>
                        <div class="blob blob-top"></div>
                        <div class="blob blob-bottom"></div>
                    </div>
                    <div class="about-text" style={Motion::slide(60).delay(400).style(revealed)}>
                        { for about.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                        <div class="highlight-grid">
                            {
                                about.highlights.iter().enumerate().map(|(index, item)| html! {
                                    <div
                                        key={index}
                                        class="highlight-card"
                                        style={Motion::rise(20).duration(600).delay(600).stagger(index, 100).style(revealed)}
                                    >
                                        <h4>{item.title}</h4>
                                        <p>{item.desc}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services(props: &RevealSectionProps) -> Html {
    let services = &props.copy.services;
    let revealed = props.revealed;
    let images = [PRACTICE.therapy_image, PRACTICE.clinical_image];
    let icons = [HEART_ICON, CHECK_ICON];

    html! {
        <section id="services" ref={props.section_ref.clone()} data-reveal={Section::Services.id()} class="section section-tinted">
            <div class="container">
                <div class="section-header" style={Motion::rise(60).style(revealed)}>
                    <h2>{services.heading}</h2>
                    <p>{services.subheading}</p>
                </div>
                <div class="service-grid">
                    {
                        services.cards.iter().enumerate().map(|(index, card)| {
                            let bullets = classes!(
                                "bullet-list",
                                (card.accent == Accent::Teal).then(|| "accent-teal-bullets")
                            );
                            html! {
                                <div
                                    key={index}
                                    class="service-card"
                                    style={Motion::rise(60).delay(200).stagger(index, 200).style(revealed)}
                                >
                                    <div class="service-card-header">
                                        <div class={classes!("service-icon", card.accent.class())}>
                                            {icon(&[icons[index]])}
                                        </div>
                                        <h3>{card.title}</h3>
                                    </div>
                                    <img src={images[index]} alt={card.image_alt} />
                                    <p>{card.description}</p>
                                    <ul class={bullets}>
                                        { for card.points.iter().map(|point| html! { <li>{*point}</li> }) }
                                    </ul>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Credentials)]
fn credentials(props: &RevealSectionProps) -> Html {
    let credentials = &props.copy.credentials;
    let revealed = props.revealed;

    html! {
        <section id="credentials" class="section section-white">
            <div class="container">
                <div class="section-header" style={Motion::rise(60).style(revealed)}>
                    <h2>{credentials.heading}</h2>
                    <p>{credentials.subheading}</p>
                </div>
                <div class="credential-grid">
                    {
                        credentials.groups.iter().enumerate().map(|(index, group)| html! {
                            <div
                                key={index}
                                class="credential-card"
                                style={Motion::rise(40).duration(600).delay(200).stagger(index, 100).style(revealed)}
                            >
                                <h3>{group.title}</h3>
                                <ul class="bullet-list">
                                    { for group.items.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    copy: &'static SiteCopy,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let copy = props.copy;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3>{copy.brand}</h3>
                        <p>{copy.footer.blurb}</p>
                    </div>
                    <div>
                        <h4>{copy.footer.services_heading}</h4>
                        <ul>
                            { for copy.footer.services.iter().map(|s| html! { <li>{*s}</li> }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{copy.footer.links_heading}</h4>
                        <ul>
                            {
                                copy.nav.items.iter().map(|item| html! {
                                    <li key={item.anchor}>
                                        <a href={format!("#{}", item.anchor)}>{item.label}</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div>
                        <h4>{copy.footer.contact_heading}</h4>
                        <p>{PRACTICE.phone}</p>
                        <p>{PRACTICE.email}</p>
                        <p>{PRACTICE.footer_address_lines[0]}<br />{PRACTICE.footer_address_lines[1]}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>
                        {format!(
                            "© {} {}. {} | {} | {}",
                            year, copy.brand, copy.footer.rights, copy.footer.privacy, copy.footer.terms
                        )}
                    </p>
                </div>
            </div>
        </footer>
    }
}
