use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::contact::contact_form::ContactForm;
use crate::reveal::on_scroll::RevealOnScroll;
use crate::theme::provider::ThemeToggle;

const FEATURES: [(&str, &str, f64); 4] = [
    ("Local", "Prime LA Location", 0.1),
    ("Private", "Boutique Living", 0.2),
    ("Direct", "Responsive Management", 0.3),
    ("Modern", "Updated Interiors", 0.4),
];

pub fn footer_text(year: i32) -> String {
    format!(
        "\u{a9} {} {}. | {} | {}",
        year,
        config::BRAND_NAME,
        config::LOCATION,
        config::CONTACT_EMAIL
    )
}

#[function_component(SplashPage)]
pub fn splash_page() -> Html {
    let year = Local::now().year();

    html! {
        <>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: var(--color-surface);
                        color: var(--color-text);
                        font-family: var(--font-family);
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    @keyframes entry {
                        from { opacity: 0; transform: translateY(24px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .opacity-0 {
                        opacity: 0;
                    }
                    .animate-entry {
                        opacity: 0;
                        animation: entry 0.8s ease-out forwards;
                    }
                    .hero-wrapper {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(135deg, #292524, #57534e);
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(120deg, rgba(28, 25, 23, 0.75), rgba(28, 25, 23, 0.35));
                    }
                    .hero-content {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 3rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .brand-name {
                        font-size: 3.5rem;
                        color: #fafaf9;
                        margin: 0 0 0.5rem;
                    }
                    .tagline {
                        font-size: 1.5rem;
                        font-weight: 400;
                        color: var(--color-primary);
                        margin: 0 0 1.5rem;
                    }
                    .description {
                        color: rgba(250, 250, 249, 0.85);
                        line-height: 1.7;
                        font-size: 1.1rem;
                    }
                    .form-container {
                        background: var(--color-surface);
                        border-radius: 20px;
                        padding: 2rem;
                        backdrop-filter: blur(12px);
                    }
                    .form-title {
                        margin: 0 0 1.5rem;
                        font-size: 1.5rem;
                    }
                    .stats-section {
                        padding: 4rem 2rem;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .stat-item h3 {
                        font-size: 1.8rem;
                        color: var(--color-primary);
                        margin: 0 0 0.4rem;
                    }
                    .stat-item p {
                        color: var(--color-text-secondary);
                        margin: 0;
                    }
                    .about-section {
                        padding: 5rem 2rem;
                    }
                    .about-content {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .about-image img {
                        width: 100%;
                        border-radius: 20px;
                        display: block;
                    }
                    .section-title {
                        font-size: 2.2rem;
                        margin-top: 0;
                    }
                    .about-text p {
                        color: var(--color-text-secondary);
                        line-height: 1.8;
                    }
                    .footer {
                        text-align: center;
                        padding: 2rem;
                        font-size: 0.9rem;
                        color: var(--color-text-secondary);
                        border-top: 1px solid rgba(196, 155, 141, 0.25);
                    }
                    @media (max-width: 900px) {
                        .hero-content,
                        .about-content {
                            grid-template-columns: 1fr;
                        }
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .brand-name {
                            font-size: 2.6rem;
                        }
                    }
                "#}
            </style>
            <ThemeToggle />

            <div class="splash-container">
                <section class="hero-wrapper">
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <RevealOnScroll class="hero-text">
                            <h1 class="brand-name">{config::BRAND_NAME}</h1>
                            <h2 class="tagline">{"Your Home in Los Angeles"}</h2>
                            <p class="description">
                                {"Offering a boutique living experience in the heart of Los Angeles. \
                                  We focus on providing well-maintained, comfortable, and modern homes \
                                  with a personal touch that big management companies can't match."}
                            </p>
                        </RevealOnScroll>

                        <RevealOnScroll delay={0.2} class="form-container">
                            <h3 class="form-title">{"Get in Touch"}</h3>
                            <ContactForm />
                        </RevealOnScroll>
                    </div>
                </section>

                <section class="stats-section">
                    <div class="stats-grid">
                        { for FEATURES.iter().map(|(title, caption, delay)| html! {
                            <RevealOnScroll delay={*delay} class="stat-item">
                                <h3>{*title}</h3>
                                <p>{*caption}</p>
                            </RevealOnScroll>
                        }) }
                    </div>
                </section>

                <section class="about-section">
                    <div class="about-content">
                        <RevealOnScroll class="about-image">
                            <img src="/assets/interior.png" alt="Detail of modern living" />
                        </RevealOnScroll>
                        <RevealOnScroll delay={0.2} class="about-text">
                            <h2 class="section-title">{"The JJML Difference"}</h2>
                            <p>
                                {"At JJML Property, we aren't a massive corporation; we are your neighbors. \
                                  We take pride in owning and managing our property with a level of care and \
                                  attention to detail that ensures you always feel at home."}
                            </p>
                            <p>
                                {"Our goal is simple: to provide a safe, stylish, and comfortable environment \
                                  for our residents to thrive in the vibrant city of Los Angeles. When you rent \
                                  with us, you deal directly with the owners, simplifying communication and \
                                  ensuring your needs are met promptly."}
                            </p>
                        </RevealOnScroll>
                    </div>
                </section>

                <footer class="footer">
                    { footer_text(year) }
                </footer>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_names_year_and_contact() {
        assert_eq!(
            footer_text(2026),
            "\u{a9} 2026 JJML Property. | Los Angeles, CA | contact@jjmlproperty.com"
        );
    }

    #[test]
    fn referenced_images_ship_with_the_build() {
        let index = include_str!("../../index.html");
        assert!(index.contains(r#"<link data-trunk rel="copy-dir" href="assets" />"#));
        let image = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/interior.png");
        assert!(image.is_file(), "{} missing", image.display());
    }

    #[test]
    fn feature_delays_stagger_upwards() {
        let delays: Vec<f64> = FEATURES.iter().map(|(_, _, d)| *d).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }
}
