use chrono::Datelike;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::scheduling_popup::SchedulingPopup;
use crate::components::social_links::{IconSize, SocialLinks};
use crate::config;
use crate::scheduling::provider::ProviderHandle;

struct Testimonial {
    headline: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        headline: "I lost 15 pounds",
        quote: "I lost 15 pounds of fat, and it's made me a better man",
    },
    Testimonial {
        headline: "Awesome mentor",
        quote: "Evan has been an awesome mentor and has helped me understand nutrition and training better than ever before.",
    },
    Testimonial {
        headline: "I had no experience",
        quote: "He has taught me the implications of my food, water intake, and cardio. I can't thank him enough! I'm in the best shape of my life.",
    },
];

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How do I know I'll even see results?",
        "Our proven track record speaks for itself. With personalized coaching and accountability, you'll see measurable results within the first 30 days or we'll work with you until you do.",
    ),
    (
        "Are there any guarantees?",
        "Yes! We guarantee that if you follow the program exactly as prescribed, you will see significant changes in your physique and mindset within 90 days.",
    ),
    (
        "What makes this different from other programs?",
        "This isn't just about workouts and meal plans. We focus on building unbreakable discipline and mental toughness that will transform every area of your life.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub provider: ProviderHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let scheduling_open = use_state(|| false);

    let open_scheduling = {
        let scheduling_open = scheduling_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening scheduling popup");
            scheduling_open.set(true);
        })
    };

    let close_scheduling = {
        let scheduling_open = scheduling_open.clone();
        Callback::from(move |_: ()| {
            info!("Closing scheduling popup");
            scheduling_open.set(false);
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing">
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"The ultimate "}
                        <span class="accent">{"1:1 coaching"}</span>
                        {" experience "}
                        <span class="accent">{"SHRED FAT"}</span>
                        {", build "}
                        <span class="accent">{"LEAN MUSCLE"}</span>
                        {", and build unbreakable "}
                        <span class="accent">{"DISCIPLINE"}</span>
                        {"."}
                    </h1>
                    <div class="hero-cta">
                        <button class="cta-button" onclick={open_scheduling.clone()}>
                            {"Schedule Free Consultation"}
                        </button>
                    </div>
                    <SocialLinks size={IconSize::Large} />
                </div>
            </section>

            <section class="testimonials">
                <div class="section-inner wide">
                    <h2 class="section-title">{"Here's What My Clients Have To Say"}</h2>
                    <p class="section-subtitle">{"Testimonials"}</p>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <div class="testimonial-avatar"></div>
                                <h3 class="testimonial-headline">{format!("\"{}\"", t.headline)}</h3>
                                <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                            </div>
                        }) }
                    </div>
                    <div class="section-cta">
                        <button class="cta-button" onclick={open_scheduling.clone()}>
                            {"Book Your Consultation"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="faq">
                <div class="section-inner">
                    <h2 class="section-title">{"FAQ"}</h2>
                    <p class="section-subtitle">{"Everything you need to know."}</p>
                    <div class="faq-list">
                        { for FAQ_ITEMS.iter().map(|(question, answer)| html! {
                            <div class="faq-entry">
                                <h3 class="faq-question">{*question}</h3>
                                <p class="faq-answer">{*answer}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="final-cta">
                <div class="section-inner">
                    <h2 class="final-cta-title">{"Ready to change your physique forever?"}</h2>
                    <button class="cta-button cta-button--outline" onclick={open_scheduling}>
                        {"Start Your Transformation"}
                    </button>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <div class="footer-links">
                        <a href="#" class="footer-link">{"Privacy Policy"}</a>
                        <a href="#" class="footer-link">{"Terms of Service"}</a>
                        <a href="#" class="footer-link">{"Contact"}</a>
                    </div>
                    <SocialLinks size={IconSize::Small} />
                    <p class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", year, config::COPYRIGHT_HOLDER)}
                    </p>
                </div>
            </footer>

            <SchedulingPopup
                visible={*scheduling_open}
                on_close={close_scheduling}
                provider={props.provider.clone()}
            />

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .accent {
                    color: #ef4444;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                }

                .hero-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.25;
                    margin-bottom: 1.5rem;
                }

                .hero-cta {
                    margin-top: 2rem;
                }

                .cta-button {
                    background: #ef4444;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.125rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    background: #dc2626;
                    transform: scale(1.05);
                }

                .cta-button--outline {
                    background: #ffffff;
                    color: #ef4444;
                    border: 2px solid #ef4444;
                }

                .cta-button--outline:hover {
                    background: #f3f4f6;
                }

                .testimonials,
                .final-cta,
                .footer {
                    background: #f3f4f6;
                }

                .testimonials,
                .faq,
                .final-cta {
                    padding: 4rem 1rem;
                }

                .section-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .section-inner.wide {
                    max-width: 72rem;
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    color: #4b5563;
                    text-align: center;
                    font-size: 1.125rem;
                    margin-bottom: 3rem;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .testimonial-card {
                    background: #ffffff;
                    padding: 1.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .testimonial-avatar {
                    width: 4rem;
                    height: 4rem;
                    background: #d1d5db;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }

                .testimonial-headline {
                    color: #ef4444;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }

                .testimonial-quote,
                .faq-answer {
                    color: #374151;
                    line-height: 1.625;
                }

                .section-cta {
                    text-align: center;
                    margin-top: 3rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .faq-entry {
                    padding-bottom: 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }

                .faq-entry:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    color: #ef4444;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }

                .final-cta {
                    text-align: center;
                }

                .final-cta-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .footer {
                    padding: 2rem 1rem;
                }

                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .footer-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-link {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-link:hover {
                    color: #111827;
                }

                .footer-copyright {
                    color: #4b5563;
                    font-size: 0.875rem;
                }

                @media (min-width: 640px) {
                    .hero-title {
                        font-size: 3.75rem;
                    }

                    .section-title {
                        font-size: 2.25rem;
                    }

                    .final-cta-title {
                        font-size: 3rem;
                    }

                    .footer-inner {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .hero-title {
                        font-size: 4.5rem;
                    }

                    .testimonial-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
