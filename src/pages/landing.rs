use yew::prelude::*;

use crate::components::carousel::BackgroundCarousel;
use crate::components::lead_form::LeadForm;
use crate::config::PageConfig;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: PageConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let PageConfig { form, carousel } = &props.config;

    // Start at the top on first render
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #fff;
                    background: #1a1a1a;
                }
                .form-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 2rem;
                }
                .form-section .bg {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .bg-slide {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0;
                    transition: opacity 0.8s ease-in-out;
                }
                .bg-slide.active {
                    opacity: 1;
                }
                .form-section .bg::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(26, 26, 26, 0.3) 0%, rgba(26, 26, 26, 0.9) 100%);
                }
                .form-card {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 480px;
                    padding: 2.5rem;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(37, 211, 102, 0.15);
                    border-radius: 16px;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .form-card h1 {
                    font-size: 2rem;
                    margin: 0 0 0.75rem;
                }
                .form-card .subtitle {
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1.5rem;
                }
                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .phone-input {
                    padding: 0.9rem 1rem;
                    font-size: 1.1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                }
                .submit-btn {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.9rem 1rem;
                    font-size: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #25d366;
                    color: #fff;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }
                .submit-btn:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .submit-btn.btn-success {
                    background: #128c7e;
                    opacity: 1;
                }
                .btn-icon {
                    width: 20px;
                    height: 20px;
                    fill: currentColor;
                }
                .form-message.error {
                    color: #ff6b6b;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .loading-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                }
                .loading-overlay[hidden] {
                    display: none;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 40px;
                    height: 40px;
                    border: 4px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .popup {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .popup-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }
                .popup-card {
                    position: relative;
                    max-width: 420px;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #222;
                    text-align: center;
                }
                .popup-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    color: #aaa;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .popup-illustration {
                    max-width: 160px;
                    margin-bottom: 1rem;
                }
                .popup-success .popup-title { color: #25d366; }
                .popup-error .popup-title { color: #ff6b6b; }
                .popup-link {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .form-card {
                        padding: 1.5rem;
                    }
                    .form-card h1 {
                        font-size: 1.6rem;
                    }
                }
                "#}
            </style>
            <section class="form-section">
                <BackgroundCarousel slides={carousel.slides.clone()} active={carousel.active} />
                <div class="form-card">
                    <h1>{"Receba o catálogo da Fast Homes"}</h1>
                    <p class="subtitle">
                        {"Deixe seu WhatsApp e enviamos o catálogo completo de imóveis direto para você."}
                    </p>
                    <LeadForm config={form.clone()} />
                </div>
            </section>
        </div>
    }
}
