use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "sm-btn sm-btn-primary",
            ButtonVariant::Outline => "sm-btn sm-btn-outline",
            ButtonVariant::Ghost => "sm-btn sm-btn-ghost",
            ButtonVariant::Danger => "sm-btn sm-btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    let button_type = r#type.clone();
    rsx! {
        button {
            class: "{base} {class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
