//! Saved searches: name the current query + filters, load one back later.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdBookmark, MdDelete},
        md_toggle_icons::{MdStar, MdStarBorder},
    },
};

use crate::pages::advanced_search_page::CandidateSearchControl;

#[component]
pub fn SavedSearchPanel() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let mut name_draft = use_signal(String::new);

    let save = Callback::new(move |_: ()| {
        let name = name_draft.peek().trim().to_string();
        if name.is_empty() {
            return;
        }
        (control.on_save_search)(name);
        name_draft.set(String::new());
    });

    rsx! {
        div {
            id: "x-saved-search-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                padding: 14px 16px;
                background-color: white;
                border-top: 1px solid rgba(164, 164, 164, 0.5);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                Icon { icon: MdBookmark, style: "width: 20px; height: 20px; color: #1C212D;" }
                span {
                    style: "font-size: 16px; font-weight: 500; color: #1C212D;",
                    "Saved Searches"
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 6px;",
                input {
                    r#type: "text",
                    placeholder: "Name this search",
                    style: "
                        flex: 1;
                        border: 1px solid rgba(101, 101, 101, 0.5);
                        border-radius: 6px;
                        padding: 6px 10px;
                        font-size: 14px;
                        outline: none;
                        min-width: 0;
                    ",
                    value: "{name_draft}",
                    oninput: move |event| name_draft.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            save(());
                        }
                    },
                }
                button {
                    style: "
                        cursor: pointer;
                        border: 1px solid #1D4ED8;
                        color: #1D4ED8;
                        background: white;
                        border-radius: 6px;
                        padding: 6px 12px;
                        font-size: 14px;
                    ",
                    onclick: move |_| save(()),
                    "Save"
                }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 4px;",
                for saved in control.saved_searches.read().iter().cloned() {
                    li {
                        key: "{saved.id}",
                        style: "
                            display: flex;
                            flex-direction: row;
                            align-items: center;
                            gap: 6px;
                            padding: 4px 0;
                        ",
                        button {
                            title: "Favorite",
                            style: "border: none; background: none; cursor: pointer; display: flex; padding: 0;",
                            onclick: {
                                let id = saved.id.clone();
                                move |_| (control.on_toggle_favorite)(id.clone())
                            },
                            if saved.is_favorite {
                                Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #F59E0B;" }
                            } else {
                                Icon { icon: MdStarBorder, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.5);" }
                            }
                        }
                        button {
                            style: "
                                border: none;
                                background: none;
                                cursor: pointer;
                                color: #1C212D;
                                font-size: 14px;
                                text-align: left;
                                flex: 1;
                                overflow: hidden;
                                text-overflow: ellipsis;
                                white-space: nowrap;
                                padding: 0;
                            ",
                            onclick: {
                                let saved = saved.clone();
                                move |_| (control.on_load_saved)(saved.clone())
                            },
                            "{saved.name}"
                        }
                        span {
                            style: "font-size: 12px; color: rgba(0,0,0,0.45); flex-shrink: 0;",
                            {saved.created_at.format("%b %d").to_string()}
                        }
                        button {
                            title: "Delete",
                            style: "border: none; background: none; cursor: pointer; display: flex; padding: 0;",
                            onclick: {
                                let id = saved.id.clone();
                                move |_| (control.on_delete_saved)(id.clone())
                            },
                            Icon { icon: MdDelete, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.5);" }
                        }
                    }
                }
            }
        }
    }
}
