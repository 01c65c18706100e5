use yew::prelude::*;

use crate::config;

const TIKTOK_PATH: &str = "M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-1-.05A6.33 6.33 0 0 0 5 20.1a6.34 6.34 0 0 0 10.86-4.43v-7a8.16 8.16 0 0 0 4.77 1.52v-3.4a4.85 4.85 0 0 1-1-.1z";

const INSTAGRAM_PATH: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z";

#[derive(Clone, Copy, PartialEq)]
pub enum IconSize {
    Large,
    Small,
}

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    pub size: IconSize,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    let (wrapper_class, icon_class) = match props.size {
        IconSize::Large => ("social-links social-links--large", "social-icon social-icon--large"),
        IconSize::Small => ("social-links social-links--small", "social-icon social-icon--small"),
    };

    let links = [
        (config::TIKTOK_URL, "Follow us on TikTok", TIKTOK_PATH),
        (config::INSTAGRAM_URL, "Follow us on Instagram", INSTAGRAM_PATH),
    ];

    html! {
        <div class={wrapper_class}>
            { for links.iter().map(|(href, label, path)| html! {
                <a
                    href={*href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label={*label}
                >
                    <svg class={icon_class} viewBox="0 0 24 24" fill="currentColor">
                        <path d={*path} />
                    </svg>
                </a>
            }) }
            <style>
                {r#"
                .social-links {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                }

                .social-links--large {
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .social-links--small {
                    gap: 1rem;
                }

                .social-link {
                    color: #4b5563;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .social-link:hover {
                    color: #ef4444;
                    transform: scale(1.1);
                }

                .social-icon--large {
                    width: 2rem;
                    height: 2rem;
                }

                .social-icon--small {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
