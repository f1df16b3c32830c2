use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::feature_card::FeatureCard;
use crate::components::rotating_text::RotatingWord;
use crate::components::timeline::Timeline;
use crate::components::waitlist_button::WaitlistButton;
use crate::content::{Entry, BENEFITS, FEATURES, JOURNEY, REASONS, ROTATING_WORDS};

fn card_grid(entries: &'static [Entry]) -> Html {
    html! {
        { for entries.iter().enumerate().map(|(index, entry)| html! {
            <div
                class="card-enter"
                key={entry.title}
                style={format!("animation-delay: {:.1}s;", index as f32 * 0.1)}
            >
                <FeatureCard
                    title={entry.title}
                    description={entry.description}
                    icon={entry.icon}
                />
            </div>
        }) }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let rotating_words: Vec<String> = ROTATING_WORDS.iter().map(|w| w.to_string()).collect();

    html! {
        <div class="landing-page">
            <main class="landing-main">

                <AnimatedSection>
                    <div class="hero">
                        <div class="hero-text">
                            <h1 class="hero-title hero-rise">
                                <span class="gradient-text">{"Innovating"}</span>
                                <br />
                                <span class="underlined">{"Funeral Service"}</span>
                                <br />
                                <span>{"Management"}</span>
                            </h1>
                            <p class="hero-pitch hero-rise delay-400">
                                {"Elevate your funeral home with "}
                                <span class="brand">{"GRACE-CRM"}</span>
                                {". Our innovative solution "}
                                <span class="highlight">{"streamlines operations"}</span>
                                {", enabling you to focus on delivering "}
                                <em>{"exceptional, compassionate care"}</em>
                                {"."}
                            </p>
                            <div class="hero-rise delay-600">
                                <WaitlistButton label="Request Early Access" classes="cta-button cta-large" />
                            </div>
                        </div>
                        <div class="hero-image hero-slide-in">
                            <img src="/assets/dashboard.jpeg" alt="GRACE-CRM Dashboard" class="showcase-image" />
                        </div>
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <h2 class="section-heading">
                        {"Built for Every Part of "}<span class="accent">{"Your Service"}</span>
                    </h2>
                    <div class="card-grid three-col">
                        { card_grid(FEATURES) }
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <h2 class="section-heading">
                        <span class="rotating-word-slot">
                            <RotatingWord words={rotating_words} />
                        </span>
                        <span class="accent">{" Your Daily Struggles"}</span>
                    </h2>
                    <div class="card-grid three-col">
                        { card_grid(BENEFITS) }
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <div class="showcase">
                        <div class="showcase-row">
                            <div class="showcase-text">
                                <h3><span class="accent">{"Effortless"}</span>{" Customer Management"}</h3>
                                <p>
                                    {"Organize client information with ease. Deliver personalized service with "}
                                    <span class="brand">{"comprehensive profiles at your fingertips"}</span>
                                    {"."}
                                </p>
                            </div>
                            <div class="showcase-media">
                                <img src="/assets/customers.jpeg" alt="GRACE Customer Management" class="showcase-image" />
                            </div>
                        </div>
                        <div class="showcase-row reversed">
                            <div class="showcase-text">
                                <h3><span class="accent">{"Seamless"}</span>{" Appointment Scheduling"}</h3>
                                <p>
                                    {"Manage appointments with precision. "}
                                    <span class="brand">{"Never miss a beat"}</span>
                                    {" in your carefully orchestrated symphony of care."}
                                </p>
                            </div>
                            <div class="showcase-media">
                                <img src="/assets/schedule.jpeg" alt="GRACE Appointment Scheduling" class="showcase-image" />
                            </div>
                        </div>
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <h2 class="section-heading">
                        {"Your "}<span class="accent">{"Journey"}</span>{" with GRACE"}
                    </h2>
                    <Timeline steps={JOURNEY} />
                </AnimatedSection>

                <AnimatedSection>
                    <h2 class="section-heading">
                        {"Why Choose "}<span class="accent">{"GRACE"}</span>{"?"}
                    </h2>
                    <div class="card-grid two-col">
                        { card_grid(REASONS) }
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <div class="closing-cta">
                        <h2>{"Ready to Transform Your Funeral Home?"}</h2>
                        <p>
                            {"Join the GRACE revolution and experience the future of compassionate, efficient funeral home management."}
                        </p>
                        <WaitlistButton label="Get Early Access Now" classes="cta-button cta-inverted" />
                    </div>
                </AnimatedSection>

            </main>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #F3F4F6;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1F2937;
                    }

                    .landing-main {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 8rem;
                    }

                    /* Hero */
                    .hero {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .hero-text {
                        flex: 1;
                        text-align: left;
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #4F46E5, #A855F7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .underlined {
                        position: relative;
                        display: inline-block;
                    }
                    .underlined::after {
                        content: '';
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 0.5rem;
                        background: #C7D2FE;
                        transform: skewX(-12deg);
                        z-index: -1;
                    }
                    .hero-pitch {
                        font-size: 1.375rem;
                        line-height: 1.6;
                        color: #374151;
                        margin: 0 0 2rem;
                    }
                    .brand {
                        font-weight: 600;
                        color: #4F46E5;
                    }
                    .highlight {
                        background: #E0E7FF;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.375rem;
                    }
                    .hero-image {
                        flex: 1;
                    }

                    @keyframes rise-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes slide-from-right {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .hero-rise {
                        animation: rise-in 0.5s ease-out 0.2s both;
                    }
                    .hero-rise.delay-400 { animation-delay: 0.4s; }
                    .hero-rise.delay-600 { animation-delay: 0.6s; }
                    .hero-slide-in {
                        animation: slide-from-right 0.5s ease-out 0.6s both;
                    }

                    /* Section headings */
                    .section-heading {
                        font-size: 2.75rem;
                        font-weight: 700;
                        text-align: center;
                        color: #111827;
                        margin: 0 0 4rem;
                    }
                    .accent {
                        color: #4F46E5;
                    }

                    /* Rotating headline word */
                    .rotating-word-slot {
                        display: inline-block;
                        min-width: 5.5em;
                        text-align: right;
                    }
                    @keyframes word-slide-in {
                        from { opacity: 0; transform: translateY(0.6em); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .rotating-word {
                        display: inline-block;
                        animation: word-slide-in 0.4s ease-out both;
                    }

                    /* Card grids */
                    .card-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .card-grid.three-col {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .card-grid.two-col {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .card-enter {
                        animation: rise-in 0.5s ease-out both;
                        height: 100%;
                    }

                    .feature-card {
                        background: linear-gradient(to bottom right, #ffffff, #EEF2FF);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        box-sizing: border-box;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-4px) scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .feature-card:active {
                        transform: scale(0.95);
                    }
                    .feature-card-header {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .feature-card-badge {
                        background: #4F46E5;
                        border-radius: 50%;
                        padding: 0.75rem;
                        margin-right: 1rem;
                        flex-shrink: 0;
                        display: flex;
                    }
                    .feature-card-icon {
                        width: 20px;
                        height: 20px;
                        color: #fff;
                    }
                    .feature-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0;
                    }
                    .feature-card p {
                        color: #4B5563;
                        font-size: 0.875rem;
                        margin: 0;
                        flex-grow: 1;
                    }

                    /* Showcase rows */
                    .showcase {
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .showcase-row {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .showcase-row.reversed {
                        flex-direction: row-reverse;
                    }
                    .showcase-text {
                        flex: 1;
                    }
                    .showcase-text h3 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .showcase-text p {
                        font-size: 1.25rem;
                        color: #374151;
                        margin: 0;
                    }
                    .showcase-media {
                        flex: 1;
                    }
                    .showcase-image {
                        width: 100%;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .showcase-image:hover {
                        transform: scale(1.05);
                    }

                    /* Call to action */
                    .cta-button {
                        background: linear-gradient(to right, #4F46E5, #A855F7);
                        color: #fff;
                        font-weight: 700;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.75rem 1.5rem;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .cta-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 15px rgba(79, 70, 229, 0.5);
                    }
                    .cta-button:active {
                        transform: scale(0.95);
                    }
                    .cta-large {
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                    }
                    .cta-inverted {
                        background: #fff;
                        color: #4F46E5;
                    }
                    .cta-inverted:hover {
                        background: #EEF2FF;
                        box-shadow: none;
                    }

                    .closing-cta {
                        text-align: center;
                        background: linear-gradient(to right, #4F46E5, #3730A3);
                        color: #fff;
                        padding: 4rem 2rem;
                        border-radius: 1rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .closing-cta h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }
                    .closing-cta p {
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }

                    @media (max-width: 900px) {
                        .landing-main {
                            gap: 4rem;
                            padding: 2rem 1rem;
                        }
                        .hero,
                        .showcase-row,
                        .showcase-row.reversed {
                            flex-direction: column;
                        }
                        .hero-title {
                            font-size: 2.5rem;
                        }
                        .hero-pitch {
                            font-size: 1.125rem;
                        }
                        .section-heading {
                            font-size: 2rem;
                            margin-bottom: 2rem;
                        }
                        .card-grid.three-col,
                        .card-grid.two-col {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (min-width: 901px) and (max-width: 1200px) {
                        .card-grid.three-col {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
