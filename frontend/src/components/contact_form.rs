use std::rc::Rc;

use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::i18n::Locale;

/// What a visitor entered in the consultation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    pub locale: &'static str,
}

impl ContactRequest {
    pub fn from_fields(
        locale: Locale,
        name: &str,
        email: &str,
        phone: &str,
        service: &str,
        message: &str,
    ) -> Self {
        let service = service.trim();
        ContactRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            service: (!service.is_empty()).then(|| service.to_string()),
            message: message.trim().to_string(),
            locale: locale.tag(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Nothing is connected; the request was dropped.
    NotSent,
    Queued,
}

/// Where consultation requests go. Booking backends plug in here.
pub trait ContactGateway {
    fn submit(&self, request: ContactRequest) -> Delivery;
}

/// The form as shipped: no endpoint, no request, no confirmation.
#[derive(Debug, Default)]
pub struct UnwiredGateway;

impl ContactGateway for UnwiredGateway {
    fn submit(&self, request: ContactRequest) -> Delivery {
        log::debug!(
            "contact form submitted ({} locale) but no gateway is wired, dropping",
            request.locale
        );
        Delivery::NotSent
    }
}

#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn ContactGateway>);

impl GatewayHandle {
    pub fn unwired() -> Self {
        GatewayHandle(Rc::new(UnwiredGateway))
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
    #[prop_or_else(GatewayHandle::unwired)]
    pub gateway: GatewayHandle,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = &props.locale.copy().contact.form;
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let service_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let locale = props.locale;
        let gateway = props.gateway.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let service_ref = service_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>().map(|el| el.value()).unwrap_or_default()
            };
            let request = ContactRequest::from_fields(
                locale,
                &input_value(&name_ref),
                &input_value(&email_ref),
                &input_value(&phone_ref),
                &service_ref.cast::<HtmlSelectElement>().map(|el| el.value()).unwrap_or_default(),
                &message_ref.cast::<HtmlTextAreaElement>().map(|el| el.value()).unwrap_or_default(),
            );
            let delivery = gateway.0.submit(request);
            log::info!("contact form delivery: {:?}", delivery);
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-field">
                <label for="contact-name">{form.name_label}</label>
                <input id="contact-name" type="text" ref={name_ref} placeholder={form.name_placeholder} />
            </div>
            <div class="form-field">
                <label for="contact-email">{form.email_label}</label>
                <input id="contact-email" type="email" ref={email_ref} placeholder={form.email_placeholder} />
            </div>
            <div class="form-field">
                <label for="contact-phone">{form.phone_label}</label>
                <input id="contact-phone" type="tel" ref={phone_ref} placeholder={form.phone_placeholder} />
            </div>
            <div class="form-field">
                <label for="contact-service">{form.service_label}</label>
                <select id="contact-service" ref={service_ref}>
                    <option value="">{form.service_placeholder}</option>
                    {
                        form.services.iter().map(|option| html! {
                            <option key={option.value} value={option.value}>{option.label}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <div class="form-field">
                <label for="contact-message">{form.message_label}</label>
                <textarea id="contact-message" rows="4" ref={message_ref} placeholder={form.message_placeholder} />
            </div>
            <button type="submit" class="button-primary form-submit">{form.submit}</button>

            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-field label {
                    display: block;
                    color: #e2e8f0;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.75rem;
                    color: #ffffff;
                    font: inherit;
                }
                .form-field input::placeholder,
                .form-field textarea::placeholder {
                    color: #cbd5e1;
                }
                .form-field select option {
                    color: #1e293b;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #3b82f6;
                }
                .form-submit {
                    width: 100%;
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Recording(RefCell<Vec<ContactRequest>>);

    impl ContactGateway for Recording {
        fn submit(&self, request: ContactRequest) -> Delivery {
            self.0.borrow_mut().push(request);
            Delivery::Queued
        }
    }

    fn filled() -> ContactRequest {
        ContactRequest::from_fields(
            Locale::En,
            "  Ana Souza ",
            "ana@example.com",
            "(555) 987-6543",
            "individual-therapy",
            "Weekday evenings work best.\n",
        )
    }

    #[test]
    fn fields_are_trimmed() {
        let request = filled();
        assert_eq!(request.name, "Ana Souza");
        assert_eq!(request.message, "Weekday evenings work best.");
        assert_eq!(request.service.as_deref(), Some("individual-therapy"));
    }

    #[test]
    fn placeholder_service_means_none() {
        let request = ContactRequest::from_fields(Locale::Pt, "Ana", "", "", "", "");
        assert_eq!(request.service, None);
        assert_eq!(request.locale, "pt");
    }

    #[test]
    fn unwired_gateway_sends_nothing() {
        assert_eq!(UnwiredGateway.submit(filled()), Delivery::NotSent);
    }

    #[test]
    fn gateways_receive_the_request_as_entered() {
        let recording = Rc::new(Recording(RefCell::new(Vec::new())));
        let handle = GatewayHandle(recording.clone());
        assert_eq!(handle.0.submit(filled()), Delivery::Queued);
        assert_eq!(recording.0.borrow().as_slice(), &[filled()]);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = GatewayHandle::unwired();
        assert!(a == a.clone());
        assert!(a != GatewayHandle::unwired());
    }

    #[test]
    fn payload_shape() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana Souza",
                "email": "ana@example.com",
                "phone": "(555) 987-6543",
                "service": "individual-therapy",
                "message": "Weekday evenings work best.",
                "locale": "en",
            })
        );

        let without_service = ContactRequest::from_fields(Locale::En, "A", "a@b.c", "", "", "hi");
        let json = serde_json::to_value(without_service).unwrap();
        assert!(json.get("service").is_none());
    }
}
