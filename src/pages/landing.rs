use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::components::section_title::SectionTitle;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_open_modal: Callback<()>,
}

const ABOUT_CARDS: [(&str, &str, &str); 3] = [
    ("🏆", "소비자만족 1위", "2025년 기준 고객 만족도 조사 최상위 랭크"),
    ("🛡", "7년+ 클린마스터", "검증된 경력과 노하우의 정직한 전문가"),
    ("⏱", "시간 단축 시스템", "1인~3인 이상 동시 투입으로 신속한 작업"),
];

const SERVICE_CARDS: [(&str, &str, [&str; 2]); 4] = [
    ("Main Service", "아파트 / 오피스텔 입주 청소", ["전문 인력 상주", "친환경 세제 사용"]),
    ("Health First", "새집증후군 케어", ["포름알데히드 제거", "피톤치드 분사"]),
    ("Crystal Clear", "외창 청소 및 코팅", ["선명한 시야 확보", "오염 방지 코팅"]),
    ("Practical Life", "방충망 교체", ["미세 벌레 차단", "고급 소재 사용"]),
];

const STRENGTHS: [(&str, &str, &str); 4] = [
    ("👥", "다수 인력 투입", "팀워크로 빠른 작업"),
    ("🔧", "전문 장비 사용", "고출력 프리미엄 장비"),
    ("✨", "철저한 AS", "만족할 때까지 책임"),
    ("⭐", "정품 세제", "자재 손상 없는 정품"),
];

const REVIEWS: [(&str, &str, &str); 3] = [
    (
        "김민준 고객님",
        "신축 아파트 입주청소",
        "7년 경력이라는 말이 허투루가 아니네요. 보이지 않는 구석 먼지까지 완벽하게 제거해주셔서 기분 좋게 입주했습니다. 전문 장비 포스가 남다르더라구요.",
    ),
    (
        "이서연 고객님",
        "오피스텔 거주청소",
        "창틀이랑 외창이 너무 지저분해서 걱정했는데, 새 것처럼 만들어주셨어요. 애프터서비스까지 확실하게 챙겨주시는 모습에 감동했습니다.",
    ),
    (
        "박지훈 고객님",
        "상가 입주 및 코팅",
        "작업 인원이 많이 오셔서 그런지 생각보다 훨씬 빨리 끝났어요. 시간 약속도 칼같으시고, 작업 퀄리티는 말할 것도 없습니다. 주변에도 추천하고 싶네요.",
    ),
];

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount.
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

    // Reveal-on-scroll: every element carrying the `reveal` class gains
    // `visible` once it enters the viewport, and keeps it.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();
                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        let element = match nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            Some(element) => element,
                            None => continue,
                        };
                        let classes = element.class_name();
                        if classes.contains("visible") {
                            continue;
                        }
                        if element.get_bounding_client_rect().top() < viewport * 0.88 {
                            element.set_class_name(&format!("{} visible", classes));
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial check for elements already in view.
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        z-index: 1;
                        color: #fff;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .reveal.from-left { transform: translateX(-50px); }
                    .reveal.from-left.visible { transform: translateX(0); }

                    .section-title { text-align: center; margin-bottom: 5rem; }
                    .section-eyebrow {
                        font-size: 0.75rem;
                        font-weight: 900;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .section-heading { font-size: 2.75rem; font-weight: 900; margin: 1rem 0 0; }
                    .section-underline {
                        width: 5rem;
                        height: 0.25rem;
                        margin: 1.5rem auto 0;
                        border-radius: 9999px;
                        background: #2563eb;
                    }

                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        justify-content: center;
                        padding: 0 2.5rem;
                    }
                    @media (min-width: 768px) { .hero-section { padding: 0 6rem; } }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        border: 1px solid #3b82f6;
                        border-radius: 9999px;
                        color: #60a5fa;
                        background: rgba(59, 130, 246, 0.1);
                        font-size: 0.875rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .hero-heading {
                        font-size: 3.75rem;
                        font-weight: 900;
                        line-height: 1.1;
                        margin: 0 0 1rem;
                    }
                    @media (min-width: 768px) { .hero-heading { font-size: 6rem; } }
                    .hero-accent {
                        background: linear-gradient(to right, #60a5fa, #67e8f9);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.6;
                        color: #9ca3af;
                        max-width: 42rem;
                        margin: 0 0 2rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #2563eb;
                        color: #fff;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-size: 1rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .hero-cta:hover { background: #3b82f6; transform: scale(1.05); }

                    .page-section {
                        padding: 11rem 2.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    @media (min-width: 768px) { .page-section { padding: 11rem 6rem; } }
                    .section-dim { background: rgba(0, 0, 0, 0.4); backdrop-filter: blur(4px); }
                    .section-black { background: #000; }

                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        width: 100%;
                        max-width: 72rem;
                    }
                    @media (min-width: 768px) { .about-grid { grid-template-columns: repeat(3, 1fr); } }
                    .about-card {
                        background: rgba(24, 24, 27, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        transition: border-color 0.3s;
                    }
                    .about-card:hover { border-color: rgba(59, 130, 246, 0.5); }
                    .about-icon { font-size: 2.5rem; color: #3b82f6; margin-bottom: 1.5rem; }
                    .about-card h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 1rem; }
                    .about-card p { color: #9ca3af; font-weight: 300; line-height: 1.6; margin: 0; }

                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        width: 100%;
                        max-width: 72rem;
                    }
                    @media (min-width: 768px) { .services-grid { grid-template-columns: 1fr 1fr; } }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(to bottom right, #18181b, #000);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        transition: transform 0.3s;
                    }
                    .service-card:hover { transform: translateY(-5px); }
                    .service-tag {
                        color: #60a5fa;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                    .service-card h3 { font-size: 1.875rem; font-weight: 900; margin: 0.5rem 0 1.5rem; }
                    .service-points { list-style: none; margin: 0; padding: 0; }
                    .service-points li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #9ca3af;
                        font-weight: 300;
                        margin-bottom: 0.75rem;
                    }
                    .service-check { color: #3b82f6; }

                    .strengths-section { background: #fff; color: #000; }
                    .strengths-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        width: 100%;
                        max-width: 80rem;
                    }
                    @media (min-width: 768px) { .strengths-grid { grid-template-columns: 1fr 1fr; } }
                    @media (min-width: 1024px) { .strengths-grid { grid-template-columns: repeat(4, 1fr); } }
                    .strength-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 1.5rem;
                        border-bottom: 2px solid transparent;
                        transition: border-color 0.3s;
                    }
                    .strength-item:hover { border-color: #2563eb; }
                    .strength-icon {
                        background: #eff6ff;
                        color: #2563eb;
                        font-size: 1.75rem;
                        padding: 1rem;
                        border-radius: 50%;
                        margin-bottom: 1.5rem;
                    }
                    .strength-item h4 { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
                    .strength-item p { color: #4b5563; font-size: 0.875rem; font-weight: 500; margin: 0; }

                    .reviews-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        width: 100%;
                        max-width: 80rem;
                    }
                    @media (min-width: 768px) { .reviews-grid { grid-template-columns: repeat(3, 1fr); } }
                    .review-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        background: rgba(24, 24, 27, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 2.5rem;
                        padding: 2.5rem;
                        transition: border-color 0.3s;
                        box-sizing: border-box;
                    }
                    .review-card:hover { border-color: rgba(59, 130, 246, 0.4); }
                    .review-stars { color: #3b82f6; letter-spacing: 0.2em; margin-bottom: 1.5rem; }
                    .review-text {
                        flex-grow: 1;
                        font-size: 1.125rem;
                        font-style: italic;
                        font-weight: 300;
                        line-height: 1.7;
                        color: #d1d5db;
                        margin: 0 0 2rem;
                    }
                    .review-footer { border-top: 1px solid rgba(255, 255, 255, 0.1); padding-top: 1.5rem; }
                    .review-footer h5 { font-size: 1.25rem; font-weight: 700; margin: 0; }
                    .review-footer p { color: #60a5fa; font-size: 0.875rem; font-weight: 500; margin: 0.25rem 0 0; }

                    .contact-heading {
                        font-size: 3rem;
                        font-weight: 900;
                        line-height: 1.2;
                        text-align: center;
                        margin: 0 0 3rem;
                    }
                    @media (min-width: 768px) { .contact-heading { font-size: 4.5rem; } }
                    .contact-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        align-items: center;
                        justify-content: center;
                    }
                    @media (min-width: 768px) { .contact-cards { flex-direction: row; } }
                    .contact-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: #18181b;
                        border: 1px solid rgba(59, 130, 246, 0.3);
                        border-radius: 1rem;
                        padding: 1.5rem 2.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                    }
                    .contact-card.clickable { cursor: pointer; transition: background 0.2s; }
                    .contact-card.clickable:hover { background: #27272a; }
                    .contact-icon { color: #3b82f6; font-size: 1.5rem; }
                    .contact-label {
                        color: #6b7280;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: -0.02em;
                        text-align: left;
                        margin: 0;
                    }
                    .contact-value { font-size: 1.5rem; font-weight: 900; margin: 0; }
                    .page-footer {
                        margin-top: 7rem;
                        text-align: center;
                        color: #374151;
                        font-size: 0.75rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                    }
                "#}
            </style>

            // Hero
            <section id="home" class="hero-section">
                <div class="reveal from-left">
                    <span class="hero-badge">{"2025 소비자 만족도 1위"}</span>
                    <h1 class="hero-heading">
                        {"공간의 가치를"}<br />
                        <span class="hero-accent">{"더 푸르게"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"7년 이상의 클린마스터가 선사하는 차원이 다른 프리미엄 입주청소 서비스. 더푸른클린이 당신의 시작을 완벽하게 만듭니다."}
                    </p>
                    <button class="hero-cta" onclick={open_modal.clone()}>
                        {"상담 예약하기 →"}
                    </button>
                </div>
            </section>

            // About
            <section id="about" class="page-section section-dim">
                <SectionTitle title="ABOUT US" subtitle="현장경력 7년 이상의 전문성" />
                <div class="about-grid">
                    {
                        ABOUT_CARDS.into_iter().map(|(icon, title, desc)| html! {
                            <div class="about-card reveal">
                                <div class="about-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Services
            <section id="services" class="page-section">
                <SectionTitle title="OUR SERVICES" subtitle="공간별 맞춤 케어 솔루션" />
                <div class="services-grid">
                    {
                        SERVICE_CARDS.into_iter().map(|(tag, title, points)| html! {
                            <div class="service-card reveal">
                                <span class="service-tag">{tag}</span>
                                <h3>{title}</h3>
                                <ul class="service-points">
                                    {
                                        points.into_iter().map(|point| html! {
                                            <li><span class="service-check">{"✔"}</span>{point}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Strengths
            <section class="page-section strengths-section">
                <SectionTitle title="WHY CHOOSE US" subtitle="더푸른클린만의 차별화된 가치" dark={true} />
                <div class="strengths-grid">
                    {
                        STRENGTHS.into_iter().map(|(icon, title, desc)| html! {
                            <div class="strength-item reveal">
                                <div class="strength-icon">{icon}</div>
                                <h4>{title}</h4>
                                <p>{desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Reviews
            <section class="page-section section-black">
                <SectionTitle title="REVIEWS" subtitle="고객님들이 증명하는 만족도" />
                <div class="reviews-grid">
                    {
                        REVIEWS.into_iter().map(|(name, target, text)| html! {
                            <div class="review-card reveal">
                                <div class="review-stars">{"★★★★★"}</div>
                                <p class="review-text">{format!("\"{}\"", text)}</p>
                                <div class="review-footer">
                                    <h5>{name}</h5>
                                    <p>{target}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Contact
            <section id="contact" class="page-section">
                <div class="reveal">
                    <h2 class="contact-heading">
                        {"당신의 새로운 시작을"}<br />
                        {"응원합니다"}
                    </h2>
                    <div class="contact-cards">
                        <div class="contact-card clickable" onclick={open_modal}>
                            <span class="contact-icon">{"📞"}</span>
                            <div>
                                <p class="contact-label">{"24시간 견적 문의"}</p>
                                <p class="contact-value">{"010-5306-7345"}</p>
                            </div>
                        </div>
                        <div class="contact-card">
                            <span class="contact-icon">{"📍"}</span>
                            <div>
                                <p class="contact-label">{"방문 가능 지역"}</p>
                                <p class="contact-value">{"서울 / 경기 전지역"}</p>
                            </div>
                        </div>
                    </div>
                    <footer class="page-footer">
                        {"© 2025 THE PUREUN CLEAN. PREMIUM MOVE-IN CLEANING SERVICE."}
                    </footer>
                </div>
            </section>
        </main>
    }
}
