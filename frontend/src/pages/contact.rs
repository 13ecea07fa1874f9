use crate::components::banner::{Banner, BannerKind};
use crate::helpers::{target_value, BANNER_MS};
use common::model::contact::{ContactInquiry, InquirySubject};
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Simulated delivery time; inquiries are not sent anywhere yet.
const SEND_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Sent,
    ClearBanner,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Invalid(String),
}

pub struct ContactPage {
    inquiry: ContactInquiry,
    status: Status,
}

impl ContactPage {
    /// Validates and moves to `Sending`. False when nothing should be sent.
    fn begin_send(&mut self) -> bool {
        if self.status == Status::Sending {
            return false;
        }
        if let Err(e) = self.inquiry.validate() {
            self.status = Status::Invalid(e.to_string());
            return false;
        }
        self.status = Status::Sending;
        true
    }

    /// End of the success banner: the form is emptied only now.
    fn finish(&mut self) -> bool {
        if self.status != Status::Sent {
            return false;
        }
        self.inquiry = ContactInquiry::default();
        self.status = Status::Idle;
        true
    }
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            inquiry: ContactInquiry::default(),
            status: Status::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                let inquiry = &mut self.inquiry;
                match field {
                    Field::Name => inquiry.name = value,
                    Field::Email => inquiry.email = value,
                    Field::Phone => inquiry.phone = value,
                    Field::Company => inquiry.company = value,
                    Field::Subject => inquiry.subject = value.parse::<InquirySubject>().ok(),
                    Field::Message => inquiry.message = value,
                }
                true
            }
            Msg::Submit => {
                if !self.begin_send() {
                    return true;
                }
                log!(format!("Contact inquiry from {}", self.inquiry.email));
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(SEND_DELAY_MS).await;
                    link.send_message(Msg::Sent);
                    TimeoutFuture::new(BANNER_MS).await;
                    link.send_message(Msg::ClearBanner);
                });
                true
            }
            Msg::Sent => {
                self.status = Status::Sent;
                true
            }
            Msg::ClearBanner => self.finish(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let edit = |field: Field| link.callback(move |e: Event| Msg::Edit(field, target_value(&e)));
        let sending = self.status == Status::Sending;
        let subject = self.inquiry.subject.map(|s| s.value()).unwrap_or_default();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="contact-page">
                <section class="contact-hero">
                    <div class="container animate-fadeInUp">
                        <h1>{"Contact CSR Industries"}</h1>
                        <p class="hero-subtitle">{"Let's discuss your sugar plant requirements"}</p>
                    </div>
                </section>

                <section class="section contact-main">
                    <div class="container contact-grid">
                        <div class="contact-info">
                            <h2>{"Get in Touch"}</h2>
                            <div class="info-card">
                                <h4>{"Visit Us"}</h4>
                                <p>{"Plot No. 382, Ekta Colony, Sangli, Maharashtra"}</p>
                            </div>
                            <div class="info-card">
                                <h4>{"Call Us"}</h4>
                                <p>{"+91 9689052887"}</p>
                            </div>
                            <div class="info-card">
                                <h4>{"Email Us"}</h4>
                                <p>{"info@csrindustries.com"}</p>
                            </div>
                            <div class="info-card">
                                <h4>{"Working Hours"}</h4>
                                <p>{"Mon - Fri: 9:00 AM - 6:00 PM, Sat: 9:00 AM - 2:00 PM"}</p>
                            </div>
                        </div>

                        <form class="contact-form" {onsubmit}>
                            <h2>{"Send Us a Message"}</h2>
                            { match &self.status {
                                Status::Sent => html! {
                                    <Banner kind={BannerKind::Success} message={"Thank you! Your message has been sent successfully."} />
                                },
                                Status::Invalid(message) => html! {
                                    <Banner kind={BannerKind::Error} message={message.clone()} />
                                },
                                _ => html! {},
                            } }
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="name">{"Full Name *"}</label>
                                    <input id="name" type="text" value={self.inquiry.name.clone()} onchange={edit(Field::Name)} />
                                </div>
                                <div class="form-group">
                                    <label for="email">{"Email Address *"}</label>
                                    <input id="email" type="email" value={self.inquiry.email.clone()} onchange={edit(Field::Email)} />
                                </div>
                            </div>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="phone">{"Phone Number *"}</label>
                                    <input id="phone" type="tel" value={self.inquiry.phone.clone()} onchange={edit(Field::Phone)} />
                                </div>
                                <div class="form-group">
                                    <label for="company">{"Company Name"}</label>
                                    <input id="company" type="text" value={self.inquiry.company.clone()} onchange={edit(Field::Company)} />
                                </div>
                            </div>
                            <div class="form-group">
                                <label for="subject">{"Inquiry Type *"}</label>
                                <select id="subject" onchange={edit(Field::Subject)}>
                                    <option value="" selected={subject.is_empty()}>{"Select inquiry type"}</option>
                                    { for InquirySubject::ALL.iter().map(|option| html! {
                                        <option value={option.value()} selected={subject == option.value()}>{ option.label() }</option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="message">{"Your Message *"}</label>
                                <textarea id="message" rows="5" value={self.inquiry.message.clone()} onchange={edit(Field::Message)} />
                            </div>
                            <button type="submit" class="btn btn-primary btn-large" disabled={sending}>
                                { if sending { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                </section>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page_with(inquiry: ContactInquiry) -> ContactPage {
        ContactPage {
            inquiry,
            status: Status::Idle,
        }
    }

    fn filled() -> ContactInquiry {
        ContactInquiry {
            name: "S. Kulkarni".into(),
            email: "sk@example.com".into(),
            phone: "+91 9850123456".into(),
            company: "Krishna Sahakari".into(),
            subject: Some(InquirySubject::TurnkeyProject),
            message: "3500 TCD expansion".into(),
        }
    }

    #[test]
    fn form_keeps_its_values_until_the_banner_ends() {
        let mut page = page_with(filled());
        assert!(page.begin_send());
        assert_eq!(page.status, Status::Sending);
        assert!(!page.begin_send());

        page.status = Status::Sent;
        assert_eq!(page.inquiry, filled());

        assert!(page.finish());
        assert_eq!(page.inquiry, ContactInquiry::default());
        assert_eq!(page.status, Status::Idle);
        assert!(!page.finish());
    }

    #[test]
    fn incomplete_inquiry_is_not_sent() {
        let mut page = page_with(ContactInquiry {
            phone: String::new(),
            ..filled()
        });
        assert!(!page.begin_send());
        assert_eq!(page.status, Status::Invalid("Please fill all fields".into()));
        assert!(!page.finish());
        assert_eq!(page.inquiry.name, "S. Kulkarni");
    }
}
