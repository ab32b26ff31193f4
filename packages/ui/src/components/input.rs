use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "sm-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    maxlength: Option<u32>,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type.clone();
    rsx! {
        input {
            id: "{id}",
            class: "sm-input {class}",
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            disabled: disabled,
            maxlength: maxlength.map(|m| m.to_string()),
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Checkbox(
    id: String,
    checked: bool,
    #[props(default)] disabled: bool,
    onchange: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        label { class: "sm-checkbox", r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: checked,
                disabled: disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            {children}
        }
    }
}
