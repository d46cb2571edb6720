use log::error;
use yew::prelude::*;

use crate::behaviors;

#[derive(Properties, PartialEq)]
struct FeatureProps {
    placeholder: AttrValue,
    source: AttrValue,
    icon: AttrValue,
    title: AttrValue,
    text: AttrValue,
    #[prop_or_default]
    image_first: bool,
}

#[function_component(Feature)]
fn feature(props: &FeatureProps) -> Html {
    let image = html! {
        <img
            src={props.placeholder.clone()}
            data-src={props.source.clone()}
            alt={props.title.clone()}
            class="features__img lazy-img"
        />
    };
    let text = html! {
        <div class="features__feature">
            <div class="features__icon">{ props.icon.clone() }</div>
            <h5 class="features__header">{ props.title.clone() }</h5>
            <p>{ props.text.clone() }</p>
        </div>
    };

    if props.image_first {
        html! { <>{ image }{ text }</> }
    } else {
        html! { <>{ text }{ image }</> }
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialProps {
    variant: AttrValue,
    header: AttrValue,
    text: AttrValue,
    name: AttrValue,
    location: AttrValue,
}

#[function_component(Testimonial)]
fn testimonial(props: &TestimonialProps) -> Html {
    html! {
        <div class={classes!("slide", props.variant.to_string())}>
            <div class="testimonial">
                <h5 class="testimonial__header">{ props.header.clone() }</h5>
                <blockquote class="testimonial__text">{ props.text.clone() }</blockquote>
                <address class="testimonial__author">
                    <h6 class="testimonial__name">{ props.name.clone() }</h6>
                    <p class="testimonial__location">{ props.location.clone() }</p>
                </address>
            </div>
        </div>
    }
}

fn operation(key: u8, header: &str, text: &str) -> Html {
    let content_class = format!("operations__content operations__content--{}", key);
    let content_class = if key == 1 {
        format!("{} operations__content--active", content_class)
    } else {
        content_class
    };
    html! {
        <div class={content_class}>
            <div class={format!("operations__icon operations__icon--{}", key)}>{ key.to_string() }</div>
            <h5 class="operations__header">{ header }</h5>
            <p>{ text }</p>
        </div>
    }
}

/// Static landing page markup. Behaviors are attached once it is mounted.
#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Err(e) = behaviors::install_all() {
                error!("Page behaviors unavailable: {}", e);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <header class="header">
                <nav class="nav">
                    <img src="img/logo.png" alt="Bankist logo" class="nav__logo" id="logo" />
                    <ul class="nav__links">
                        <li class="nav__item"><a class="nav__link" href="#section--1">{"Features"}</a></li>
                        <li class="nav__item"><a class="nav__link" href="#section--2">{"Operations"}</a></li>
                        <li class="nav__item"><a class="nav__link" href="#section--3">{"Testimonials"}</a></li>
                        <li class="nav__item">
                            <a class="nav__link nav__link--btn btn--show-modal" href="#">{"Open account"}</a>
                        </li>
                    </ul>
                </nav>

                <div class="header__title">
                    <h1>
                        {"When "}<span class="highlight">{"banking"}</span>
                        {" meets"}<br />
                        <span class="highlight">{"minimalist"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to">{"Learn more ↓"}</button>
                    <img src="img/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>
            </header>

            <section class="section" id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and more."}
                    </h3>
                </div>
                <div class="features">
                    <Feature
                        placeholder="img/digital-lazy.jpg"
                        source="img/digital.jpg"
                        icon="💻"
                        title="100% digital bank"
                        text="Open an account and manage every card and transfer from your phone."
                        image_first={true}
                    />
                    <Feature
                        placeholder="img/grow-lazy.jpg"
                        source="img/grow.jpg"
                        icon="📈"
                        title="Watch your money grow"
                        text="Savings goals, round-ups and interest paid out every month."
                    />
                    <Feature
                        placeholder="img/card-lazy.jpg"
                        source="img/card.jpg"
                        icon="💳"
                        title="Free debit card included"
                        text="No fees abroad, instant freeze and a fresh number whenever you want."
                        image_first={true}
                    />
                </div>
            </section>

            <section class="section" id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">
                        {"Everything as simple as possible, but no simpler."}
                    </h3>
                </div>
                <div class="operations">
                    <div class="operations__tab-container">
                        <button class="btn operations__tab operations__tab--1 operations__tab--active" data-tab="1">
                            <span>{"01"}</span>{"Instant Transfers"}
                        </button>
                        <button class="btn operations__tab operations__tab--2" data-tab="2">
                            <span>{"02"}</span>{"Instant Loans"}
                        </button>
                        <button class="btn operations__tab operations__tab--3" data-tab="3">
                            <span>{"03"}</span>{"Instant Closing"}
                        </button>
                    </div>
                    { operation(1, "Transfer money to anyone, instantly! No fees, no BS.",
                        "Send money to friends and family in seconds, in any currency.") }
                    { operation(2, "Buy a home or make your dreams come true, with instant loans.",
                        "Get a decision in minutes and the money the same day.") }
                    { operation(3, "No longer need your account? No problem! Close it instantly.",
                        "Close your account from the app, no phone calls and no paperwork.") }
                </div>
            </section>

            <section class="section" id="section--3">
                <div class="section__title section__title--testimonials">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions of Bankists are already making their lifes simpler."}
                    </h3>
                </div>
                <div class="slider">
                    <Testimonial
                        variant="slide--1"
                        header="Best financial decision ever!"
                        text="Switching took ten minutes and I have not thought about fees since."
                        name="Aarav Lynn"
                        location="San Francisco, USA"
                    />
                    <Testimonial
                        variant="slide--2"
                        header="The last step to becoming a complete minimalist"
                        text="One app, one card, nothing else in my wallet."
                        name="Miyah Miles"
                        location="London, UK"
                    />
                    <Testimonial
                        variant="slide--3"
                        header="Finally free from old-school banks"
                        text="No branch visits, no hold music, no surprise charges."
                        name="Francisco Gomes"
                        location="Lisbon, Portugal"
                    />
                    <Testimonial
                        variant="slide--4"
                        header="Saving finally feels easy"
                        text="The round-ups paid for my holiday without me noticing."
                        name="Ines Kovac"
                        location="Zagreb, Croatia"
                    />
                    <button class="slider__btn slider__btn--left">{"←"}</button>
                    <button class="slider__btn slider__btn--right">{"→"}</button>
                    <div class="dots"></div>
                </div>
            </section>

            <section class="section section--sign-up">
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join Bankist was one year ago. The second best is today!"}
                    </h3>
                </div>
                <button class="btn btn--show-modal">{"Open your free account today!"}</button>
            </section>

            <footer class="footer">
                <p class="footer__copyright">{"© Bankist"}</p>
            </footer>

            <div class="modal hidden">
                <button class="btn--close-modal">{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br />
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form">
                    <label>{"First Name"}</label>
                    <input type="text" />
                    <label>{"Last Name"}</label>
                    <input type="text" />
                    <label>{"Email Address"}</label>
                    <input type="email" />
                    <button class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class="overlay hidden"></div>
        </>
    }
}
