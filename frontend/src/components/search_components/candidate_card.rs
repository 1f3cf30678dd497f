//! Candidate result card component.

use dioxus::prelude::*;
use common::search_result::Candidate;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdOpenInNew, MdVerifiedUser, MdWork},
        md_communication_icons::MdLocationOn,
        md_editor_icons::MdAttachMoney,
    },
};

use common::filter_fields::fmt_num;

fn status_colors(status: &str) -> (&'static str, &'static str) {
    match status {
        "INTERESTED" | "SELECTED" | "JOINED" => ("#DCFCE7", "#166534"),
        "NOT_INTERESTED" | "REJECTED" => ("#FEE2E2", "#991B1B"),
        "ON_HOLD" => ("#FEF9C3", "#854D0E"),
        "INTERVIEW_SCHEDULED" => ("#DBEAFE", "#1E40AF"),
        _ => ("#E5E7EB", "#374151"),
    }
}

#[component]
pub fn CandidateCard(candidate: ReadSignal<Candidate>) -> Element {
    let Candidate {
        name,
        current_location,
        total_experience,
        current_ctc,
        expected_ctc,
        notice_period,
        primary_skills,
        current_company,
        profile,
        status,
        is_verified,
        resume_url,
        ..
    } = candidate.read().clone();

    let (status_bg, status_fg) = status_colors(&status);
    let headline = if profile.is_empty() {
        current_company.clone()
    } else if current_company.is_empty() {
        profile.clone()
    } else {
        format!("{profile} at {current_company}")
    };

    rsx! {
        div {
            class: "x-candidate-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 8px;
                background: white;
                border: 1px solid #AAAAAA55;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: NAME - VERIFIED - SPACER - STATUS PILL
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 19px; font-weight: 500; color: rgb(0, 0, 0);",
                    "{name}"
                }
                if is_verified {
                    Icon {
                        icon: MdVerifiedUser,
                        style: "width: 18px; height: 18px; color: #16A34A;",
                    }
                }
                div { style: "flex: 1 1 auto;" }
                if !status.is_empty() {
                    span {
                        style: "
                            font-size: 13px;
                            font-weight: 500;
                            border-radius: 1000px;
                            padding: 2px 10px;
                            background-color: {status_bg};
                            color: {status_fg};
                        ",
                        "{status}"
                    }
                }
            }
            // Row 2: PROFILE / COMPANY / LOCATION / NUMBERS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 16px;
                    font-size: 14px;
                    color: rgba(28, 33, 45, 0.8);
                ",
                if !headline.is_empty() {
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdWork, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.5);" }
                        "{headline}"
                    }
                }
                if !current_location.is_empty() {
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.5);" }
                        "{current_location}"
                    }
                }
                span { "{fmt_num(total_experience)} yrs exp" }
                span {
                    style: "display: flex; align-items: center; gap: 2px;",
                    Icon { icon: MdAttachMoney, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.5);" }
                    "₹{fmt_num(current_ctc)} → ₹{fmt_num(expected_ctc)} LPA"
                }
                if !notice_period.is_empty() {
                    span { "Notice: {notice_period}" }
                }
            }
            // Row 3: SKILL TAGS - SPACER - RESUME LINK
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    width: 100%;
                    flex-wrap: wrap;
                ",
                for skill in primary_skills.iter().take(8).cloned() {
                    span {
                        key: "{skill}",
                        style: "
                            background-color: #F1F5F9;
                            color: #334155;
                            border-radius: 4px;
                            padding: 2px 8px;
                            font-size: 13px;
                        ",
                        "{skill}"
                    }
                }
                div { style: "flex: 1 1 auto;" }
                if let Some(url) = resume_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        title: "Open resume",
                        style: "display: flex; align-items: center; gap: 4px; color: #1D4ED8; font-size: 14px; text-decoration: none;",
                        "Resume"
                        Icon { icon: MdOpenInNew, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}
