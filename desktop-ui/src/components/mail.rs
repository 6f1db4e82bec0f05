use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::api::{send_email, EmailReceipt, EmailRequest};

const CONTACT_ADDRESS: &str = "sadek.walid.mendi@gmail.com";

/// Contact form. The send is fire-and-forget from the desktop's point of
/// view: the only outcome is the banner text.
#[component]
pub fn MailView() -> Element {
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut from_email = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut result = use_signal(|| None::<EmailReceipt>);

    let can_send =
        !*pending.read() && !subject.read().is_empty() && !message.read().is_empty();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if !can_send {
            return;
        }

        result.set(None);
        pending.set(true);

        let request = EmailRequest::new(
            subject.read().clone(),
            message.read().clone(),
            from_email.read().clone(),
        );
        spawn(async move {
            match send_email(&request).await {
                Ok(receipt) => {
                    if receipt.success {
                        subject.set(String::new());
                        message.set(String::new());
                        from_email.set(String::new());
                    }
                    result.set(Some(receipt));
                }
                Err(e) => {
                    tracing::error!("Failed to send contact email: {e}");
                    result.set(Some(EmailReceipt {
                        success: false,
                        error: Some(e),
                        id: None,
                    }));
                }
            }
            pending.set(false);
        });
    };

    let banner = result.read().clone().map(|receipt| {
        if receipt.success {
            (
                true,
                "Email sent successfully! I'll get back to you soon.".to_string(),
            )
        } else {
            (
                false,
                format!(
                    "Error: {}",
                    receipt.error.as_deref().unwrap_or("Failed to send email")
                ),
            )
        }
    });

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; color: #e5e7eb;",

            div {
                style: "background: var(--panel-bg); border-bottom: 1px solid var(--panel-border); \
                        padding: 0.75rem; display: flex; align-items: center; gap: 0.75rem;",
                div {
                    style: "background: rgba(168, 85, 247, 0.2); color: #d8b4fe; padding: 0.5rem; \
                            border-radius: 999px; font-size: 1rem;",
                    "✉️"
                }
                div {
                    h3 { style: "margin: 0; font-size: 0.875rem; color: #f3f4f6;", "New Message" }
                    p {
                        style: "margin: 0; font-size: 0.75rem; color: var(--text-muted);",
                        "To: {CONTACT_ADDRESS}"
                    }
                }
            }

            div {
                style: "flex: 1; padding: 1.5rem; overflow-y: auto;",

                form {
                    style: "display: flex; flex-direction: column; gap: 1rem; max-width: 32rem; \
                            margin: 0 auto;",
                    onsubmit: submit,

                    if let Some((success, text)) = banner {
                        div {
                            style: if success {
                                "padding: 0.75rem; border-radius: 8px; font-size: 0.875rem; \
                                 background: rgba(16, 185, 129, 0.2); color: #6ee7b7; \
                                 border: 1px solid rgba(16, 185, 129, 0.3);"
                            } else {
                                "padding: 0.75rem; border-radius: 8px; font-size: 0.875rem; \
                                 background: rgba(239, 68, 68, 0.2); color: #fca5a5; \
                                 border: 1px solid rgba(239, 68, 68, 0.3);"
                            },
                            "{text}"
                        }
                    }

                    FormField {
                        label: "Your Email (Optional)",
                        input {
                            style: "{INPUT_STYLE}",
                            r#type: "email",
                            placeholder: "your.email@example.com",
                            value: "{from_email}",
                            oninput: move |e| from_email.set(e.value()),
                        }
                    }

                    FormField {
                        label: "Subject",
                        input {
                            style: "{INPUT_STYLE}",
                            r#type: "text",
                            placeholder: "Project Inquiry",
                            required: true,
                            value: "{subject}",
                            oninput: move |e| subject.set(e.value()),
                        }
                    }

                    FormField {
                        label: "Message",
                        textarea {
                            style: "{INPUT_STYLE} resize: none; min-height: 9rem;",
                            placeholder: "Hi, I'd like to discuss a project...",
                            required: true,
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                    }

                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; \
                                padding-top: 1rem;",

                        div {
                            style: "display: flex; gap: 1rem; font-size: 0.8rem;",
                            a {
                                style: "color: var(--text-muted); text-decoration: none;",
                                href: "https://github.com/0xRektora",
                                "GitHub"
                            }
                            a {
                                style: "color: var(--text-muted); text-decoration: none;",
                                href: "https://www.linkedin.com/in/0x-redacted/",
                                "LinkedIn"
                            }
                            a {
                                style: "color: var(--text-muted); text-decoration: none;",
                                href: "https://x.com/primus_walidus",
                                "X"
                            }
                        }

                        button {
                            style: if can_send {
                                "background: #9333ea; color: white; border: none; padding: 0.5rem 1.5rem; \
                                 border-radius: 8px; font-size: 0.875rem; font-weight: 500; cursor: pointer;"
                            } else {
                                "background: #4b5563; color: white; border: none; padding: 0.5rem 1.5rem; \
                                 border-radius: 8px; font-size: 0.875rem; font-weight: 500; cursor: not-allowed;"
                            },
                            r#type: "submit",
                            disabled: !can_send,
                            if *pending.read() { "Sending..." } else { "Send ➤" }
                        }
                    }
                }
            }
        }
    }
}

const INPUT_STYLE: &str = "width: 100%; background: var(--panel-bg); \
    border: 1px solid var(--panel-border); border-radius: 8px; padding: 0.5rem 1rem; \
    color: #e5e7eb; font-size: 0.875rem; outline: none; font-family: inherit;";

#[component]
fn FormField(label: &'static str, children: Element) -> Element {
    rsx! {
        div {
            label {
                style: "display: block; font-size: 0.7rem; font-weight: 600; \
                        color: var(--text-muted); text-transform: uppercase; \
                        letter-spacing: 0.05em; margin-bottom: 0.25rem;",
                "{label}"
            }
            {children}
        }
    }
}
