use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::LeadConfig;
use crate::lead::{submit_lead, LeadField, LeadRequest, ServiceType, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct ConsultationModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub config: LeadConfig,
}

/// Consultation booking dialog. Collects a [`LeadRequest`] field by field,
/// posts it to the collection endpoint on submit and, on acceptance, opens
/// an SMS composer pre-filled with the same details as a best-effort
/// notification. Closing the dialog discards the draft; an in-flight
/// submission is not cancelled by closing.
#[function_component(ConsultationModal)]
pub fn consultation_modal(props: &ConsultationModalProps) -> Html {
    let lead = use_state(LeadRequest::default);
    let state = use_state(SubmissionState::default);

    // A dismissed dialog starts over from an empty request.
    {
        let lead = lead.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |is_open| {
                if !*is_open {
                    lead.set(LeadRequest::default());
                    state.set(SubmissionState::default());
                }
                || ()
            },
            props.is_open,
        );
    }

    let edit_field = |field: LeadField| {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.set(field, input.value());
            lead.set(next);
        })
    };

    let select_service = {
        let lead = lead.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.service = ServiceType::from_label(&select.value());
            lead.set(next);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let lead = lead.clone();
        let state = state.clone();
        let on_close = props.on_close.clone();
        let config = props.config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The required attributes keep this unreachable with empty
            // fields; the guard also swallows a forced double submit.
            if !state.submit_allowed(&lead) {
                return;
            }
            state.set((*state).begin(&lead));

            let request = (*lead).clone();
            let lead = lead.clone();
            let state = state.clone();
            let on_close = on_close.clone();
            let config = config.clone();
            spawn_local(async move {
                match submit_lead(&config, &request).await {
                    Ok(()) => {
                        // Secondary notification: fire-and-forget, its
                        // outcome never affects the submission result.
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .location()
                                .set_href(&request.sms_uri(&config.notify_phone));
                        }
                        state.set(SubmissionState::Submitting.finish(true));

                        let state = state.clone();
                        let lead = lead.clone();
                        let on_close = on_close.clone();
                        Timeout::new(3_000, move || {
                            state.set(SubmissionState::Success.expire());
                            lead.set(LeadRequest::default());
                            on_close.emit(());
                        })
                        .forget();
                    }
                    Err(err) => {
                        log!(format!("lead submission failed: {}", err));
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(err.user_message());
                        }
                        // The alert is blocking, so by the time it returns
                        // the failure is acknowledged and the form (with
                        // its values untouched) becomes editable again.
                        state.set(SubmissionState::Submitting.finish(false).acknowledge());
                    }
                }
            });
        })
    };

    if !props.is_open {
        return html! {};
    }

    let submitting = state.is_submitting();

    html! {
        <div class="modal-layer">
            <style>
                {r#"
                    .modal-layer {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        background: rgba(24, 24, 27, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        overflow: hidden;
                        animation: modal-pop 0.25s ease-out;
                    }
                    @keyframes modal-pop {
                        from { opacity: 0; transform: scale(0.9) translateY(20px); }
                        to { opacity: 1; transform: scale(1) translateY(0); }
                    }
                    .modal-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .modal-close:hover { color: #fff; }
                    .modal-heading { font-size: 1.875rem; font-weight: 900; color: #fff; margin: 0 0 0.5rem; }
                    .modal-note { color: #60a5fa; font-size: 0.875rem; font-weight: 500; margin: 0 0 2rem; }
                    .lead-form { display: flex; flex-direction: column; gap: 1.25rem; }
                    .field-label {
                        display: block;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #9ca3af;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        padding: 0 0.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .field-input, .field-select {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 1rem 1.25rem;
                        color: #fff;
                        font-size: 1rem;
                        outline: none;
                        transition: border-color 0.2s;
                    }
                    .field-input::placeholder { color: #52525b; }
                    .field-input:focus, .field-select:focus { border-color: #3b82f6; }
                    .field-input:disabled, .field-select:disabled { opacity: 0.5; }
                    .field-select { appearance: none; cursor: pointer; }
                    .field-select option { background: #18181b; }
                    .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .submit-button {
                        width: 100%;
                        margin-top: 1rem;
                        background: #2563eb;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1rem;
                        padding: 1.25rem;
                        border: none;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .submit-button:hover { background: #3b82f6; }
                    .submit-button:disabled { background: #1e40af; cursor: not-allowed; }
                    .submit-spinner {
                        display: inline-block;
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .success-view { text-align: center; padding: 2.5rem 0; }
                    .success-badge {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        background: rgba(59, 130, 246, 0.2);
                        color: #3b82f6;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                    }
                    .success-view h3 { font-size: 1.875rem; font-weight: 700; color: #fff; margin: 0 0 0.5rem; }
                    .success-view p { color: #9ca3af; line-height: 1.6; margin: 0; }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-card">
                <button class="modal-close" onclick={close}>{"✕"}</button>
                {
                    if *state == SubmissionState::Success {
                        html! {
                            <div class="success-view">
                                <div class="success-badge">{"✓"}</div>
                                <h3>{"상담 예약 접수 완료"}</h3>
                                <p>
                                    {"데이터가 안전하게 수집되었습니다."}<br/>
                                    {"문자 전송 확인 후 클린마스터가 즉시 연락드리겠습니다!"}
                                </p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <h3 class="modal-heading">{"상담 예약하기"}</h3>
                                <p class="modal-note">{"관리자에게 정보가 안전하게 전달됩니다."}</p>
                                <form class="lead-form" onsubmit={onsubmit}>
                                    <div>
                                        <label class="field-label">{"이름"}</label>
                                        <input
                                            class="field-input"
                                            type="text"
                                            required={true}
                                            disabled={submitting}
                                            placeholder="성함을 입력해주세요"
                                            value={lead.name.clone()}
                                            oninput={edit_field(LeadField::Name)}
                                        />
                                    </div>
                                    <div>
                                        <label class="field-label">{"휴대폰 번호"}</label>
                                        <input
                                            class="field-input"
                                            type="tel"
                                            required={true}
                                            disabled={submitting}
                                            placeholder="010-0000-0000"
                                            value={lead.phone.clone()}
                                            oninput={edit_field(LeadField::Phone)}
                                        />
                                    </div>
                                    <div class="field-row">
                                        <div>
                                            <label class="field-label">{"평수"}</label>
                                            <input
                                                class="field-input"
                                                type="number"
                                                required={true}
                                                disabled={submitting}
                                                placeholder="평수 입력"
                                                value={lead.size.clone()}
                                                oninput={edit_field(LeadField::Size)}
                                            />
                                        </div>
                                        <div>
                                            <label class="field-label">{"서비스 선택"}</label>
                                            <select
                                                class="field-select"
                                                disabled={submitting}
                                                onchange={select_service}
                                            >
                                                {
                                                    ServiceType::ALL.into_iter().map(|service| html! {
                                                        <option
                                                            value={service.label()}
                                                            selected={lead.service == service}
                                                        >
                                                            { service.menu_label() }
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                    </div>
                                    <div>
                                        <label class="field-label">{"주소"}</label>
                                        <input
                                            class="field-input"
                                            type="text"
                                            required={true}
                                            disabled={submitting}
                                            placeholder="상세 주소를 입력해주세요"
                                            value={lead.address.clone()}
                                            oninput={edit_field(LeadField::Address)}
                                        />
                                    </div>
                                    <button class="submit-button" type="submit" disabled={submitting}>
                                        {
                                            if submitting {
                                                html! { <><span class="submit-spinner"></span>{" 전송 중..."}</> }
                                            } else {
                                                html! { <>{"상담 신청하기 →"}</> }
                                            }
                                        }
                                    </button>
                                </form>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
