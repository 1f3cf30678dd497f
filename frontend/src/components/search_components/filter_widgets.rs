//! Individual filter widgets.
//!
//! Every widget owns exactly one filter field and reports edits through its
//! `onchange` callback with the complete new value. None of them touch
//! filter state directly.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::MdClose,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

use common::filter_state::{SkillMatchType, toggle_value};

/// Checkbox list over a fixed option set; selection keeps click order.
#[component]
pub fn MultiSelectList(options: Vec<String>, selected: Vec<String>, onchange: Callback<Vec<String>>) -> Element {
    let current = selected.clone();
    let ontoggle = Callback::new(move |value: String| {
        onchange(toggle_value(&current, &value));
    });

    rsx! {
        ul {
            style: "list-style: none; padding: 0; margin: 0;",
            for option in options.iter().cloned() {
                li {
                    key: "{option}",
                    MultiSelectRow {
                        value: option.clone(),
                        checked: selected.contains(&option),
                        ontoggle,
                    }
                }
            }
        }
    }
}

#[component]
fn MultiSelectRow(value: String, checked: bool, ontoggle: Callback<String>) -> Element {
    let row_value = value.clone();
    rsx! {
        div {
            class: "x-filter-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px 0;
                align-items: center;
            ",
            onclick: move |_| ontoggle(row_value.clone()),

            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    line-height: 22px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{value}"
            }
        }
    }
}

/// Free-text multi-value input: Enter adds a tag, the tag's cross removes it.
#[component]
pub fn TagInput(placeholder: String, values: Vec<String>, onchange: Callback<Vec<String>>) -> Element {
    let mut draft = use_signal(String::new);

    let current = values.clone();
    let commit = Callback::new(move |_: ()| {
        let text = draft.peek().trim().to_string();
        if text.is_empty() {
            return;
        }
        let mut next = current.clone();
        if !next.contains(&text) {
            next.push(text);
        }
        onchange(next);
        draft.set(String::new());
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            if !values.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for value in values.iter().cloned() {
                        span {
                            key: "{value}",
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 4px;
                                background-color: #E0E7FF;
                                color: #1C212D;
                                border-radius: 1000px;
                                padding: 3px 10px;
                                font-size: 14px;
                            ",
                            "{value}"
                            button {
                                style: "border: none; background: none; cursor: pointer; display: flex; padding: 0;",
                                onclick: {
                                    let values = values.clone();
                                    let value = value.clone();
                                    move |_| onchange(toggle_value(&values, &value))
                                },
                                Icon { icon: MdClose, style: "width: 14px; height: 14px; color: #1C212D;" }
                            }
                        }
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.5);
                    border-radius: 6px;
                    padding: 7px 10px;
                    font-size: 15px;
                    outline: none;
                ",
                value: "{draft}",
                oninput: move |event| draft.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        commit(());
                    }
                },
            }
        }
    }
}

/// Min/max pair over a numeric range (years of experience, LPA).
#[component]
pub fn RangeDualInput(
    label: String,
    min_value: f64,
    max_value: f64,
    lower_bound: f64,
    upper_bound: f64,
    step: f64,
    onchange: Callback<(f64, f64)>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 14px; font-weight: 400; color: rgba(28, 33, 45, 0.7);",
                "{label}"
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                input {
                    r#type: "number",
                    min: "{lower_bound}",
                    max: "{upper_bound}",
                    step: "{step}",
                    style: "width: 70px; border: 1px solid rgba(101, 101, 101, 0.5); border-radius: 6px; padding: 6px; font-size: 15px;",
                    value: "{min_value}",
                    oninput: move |event| {
                        let parsed = event.value().parse::<f64>().unwrap_or(lower_bound);
                        onchange((parsed, max_value));
                    },
                }
                span { style: "color: rgba(28, 33, 45, 0.5);", "to" }
                input {
                    r#type: "number",
                    min: "{lower_bound}",
                    max: "{upper_bound}",
                    step: "{step}",
                    style: "width: 70px; border: 1px solid rgba(101, 101, 101, 0.5); border-radius: 6px; padding: 6px; font-size: 15px;",
                    value: "{max_value}",
                    oninput: move |event| {
                        let parsed = event.value().parse::<f64>().unwrap_or(upper_bound);
                        onchange((min_value, parsed));
                    },
                }
            }
        }
    }
}

/// Passing-year min/max pair.
#[component]
pub fn YearRangeInput(min_year: u16, max_year: u16, onchange: Callback<(u16, u16)>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            input {
                r#type: "number",
                style: "width: 80px; border: 1px solid rgba(101, 101, 101, 0.5); border-radius: 6px; padding: 6px; font-size: 15px;",
                value: "{min_year}",
                oninput: move |event| {
                    let parsed = event.value().parse::<u16>().unwrap_or(min_year);
                    onchange((parsed, max_year));
                },
            }
            span { style: "color: rgba(28, 33, 45, 0.5);", "to" }
            input {
                r#type: "number",
                style: "width: 80px; border: 1px solid rgba(101, 101, 101, 0.5); border-radius: 6px; padding: 6px; font-size: 15px;",
                value: "{max_year}",
                oninput: move |event| {
                    let parsed = event.value().parse::<u16>().unwrap_or(max_year);
                    onchange((min_year, parsed));
                },
            }
        }
    }
}

/// Labelled checkbox row for the boolean filters.
#[component]
pub fn ToggleRow(label: String, checked: bool, onchange: Callback<bool>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px 0;
                align-items: center;
            ",
            onclick: move |_| onchange(!checked),

            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            span {
                style: "font-size: 15px; color: rgb(0, 0, 0);",
                "{label}"
            }
        }
    }
}

/// Plain text field for company / profile / specialization.
#[component]
pub fn TextField(label: String, placeholder: String, value: String, onchange: Callback<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 14px; font-weight: 400; color: rgba(28, 33, 45, 0.7);",
                "{label}"
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.5);
                    border-radius: 6px;
                    padding: 7px 10px;
                    font-size: 15px;
                    outline: none;
                ",
                value: "{value}",
                oninput: move |event| onchange(event.value()),
            }
        }
    }
}

/// Two-way switch between "any of the skills" and "all of the skills".
#[component]
pub fn SkillMatchToggle(value: SkillMatchType, onchange: Callback<SkillMatchType>) -> Element {
    let option_style = |active: bool| {
        let (bg, fg) = if active {
            ("#1C212D", "white")
        } else {
            ("white", "#1C212D")
        };
        format!(
            "cursor: pointer; border: 1px solid #1C212D; background-color: {bg}; color: {fg}; \
             padding: 5px 14px; font-size: 14px;"
        )
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; border-radius: 6px; overflow: hidden; width: fit-content;",
            button {
                style: option_style(value == SkillMatchType::Any),
                onclick: move |_| onchange(SkillMatchType::Any),
                "Match any"
            }
            button {
                style: option_style(value == SkillMatchType::All),
                onclick: move |_| onchange(SkillMatchType::All),
                "Match all"
            }
        }
    }
}
