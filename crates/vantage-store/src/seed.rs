//! Seed corpus for the offline backend: used whenever no snapshot file
//! exists or the existing one fails to parse.

use chrono::{Duration, SecondsFormat, Utc};

use vantage_types::{Chat, DocRef, Insight, Message};

use crate::snapshot::Snapshot;

/// Starter prompts surfaced to empty chats and echoed as follow-up
/// suggestions by the offline backend.
pub const CHAT_SUGGESTIONS: [&str; 3] = [
    "Summarize latest docs",
    "Show related files",
    "Draft an email",
];

fn days_ago_iso(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Realistic seed data: three chats, three insights, and their threads.
pub fn seed_snapshot() -> Snapshot {
    let c1 = "chat-q4-strategy";
    let c2 = "chat-vendor-followup";
    let c3 = "chat-revenue-forecast";

    let i1 = "insight-board-q4";
    let i2 = "insight-budget-q4";
    let i3 = "insight-ops-review";

    let chats = vec![
        Chat {
            id: c1.to_string(),
            title: "Q4 Strategy".to_string(),
            last_message: "Summarize latest docs".to_string(),
            updated_at: days_ago_iso(0),
            message_count: Some(3),
        },
        Chat {
            id: c2.to_string(),
            title: "Vendor follow-up".to_string(),
            last_message: "Draft an email".to_string(),
            updated_at: days_ago_iso(1),
            message_count: Some(2),
        },
        Chat {
            id: c3.to_string(),
            title: "Revenue forecast".to_string(),
            last_message: "Can you project FY numbers?".to_string(),
            updated_at: days_ago_iso(5),
            message_count: Some(4),
        },
    ];

    let insights = vec![
        Insight {
            id: i1.to_string(),
            title: "Board Meeting – Q4".to_string(),
            kind: "Meeting".to_string(),
            date: Some("09/12/2025".to_string()),
            summary: "Quarterly performance & strategy.".to_string(),
            updated_at: days_ago_iso(0),
            tags: Vec::new(),
        },
        Insight {
            id: i2.to_string(),
            title: "Budget Report Q4".to_string(),
            kind: "Document".to_string(),
            date: Some("09/08/2025".to_string()),
            summary: "Detailed budgets & forecasts.".to_string(),
            updated_at: days_ago_iso(3),
            tags: Vec::new(),
        },
        Insight {
            id: i3.to_string(),
            title: "Ops Review – August".to_string(),
            kind: "Recording".to_string(),
            date: Some("08/28/2025".to_string()),
            summary: "Operational KPIs and actions.".to_string(),
            updated_at: days_ago_iso(20),
            tags: Vec::new(),
        },
    ];

    let mut snapshot = Snapshot {
        chats,
        insights,
        messages_by_id: Default::default(),
    };

    snapshot.messages_by_id.insert(
        c1.to_string(),
        vec![
            Message::user("m-01", "Summarize latest docs", days_ago_iso(0)),
            Message::ai(
                "m-02",
                "Docs summarized. Revenue +7% QoQ; key risks: churn, infra cost.",
                days_ago_iso(0),
            )
            .with_docs(vec![DocRef {
                id: "DOC-11".to_string(),
                name: "Q4-Summary.pdf".to_string(),
            }])
            .with_follow_ups(vec![
                "Show QoQ chart".to_string(),
                "List risks by impact".to_string(),
                "Attach minutes".to_string(),
            ]),
            Message::user("m-03", "List action items by owner", days_ago_iso(0)),
        ],
    );

    snapshot.messages_by_id.insert(
        c2.to_string(),
        vec![
            Message::user("m-04", "Draft an email to Acme about SLA", days_ago_iso(1)),
            Message::ai(
                "m-05",
                "Drafted. Subject: SLA Clarification for October. Want to send?",
                days_ago_iso(1),
            ),
        ],
    );

    snapshot.messages_by_id.insert(
        c3.to_string(),
        vec![
            Message::ai("m-06", "Hi! What forecast horizon do you need?", days_ago_iso(5)),
            Message::user("m-07", "Can you project FY numbers?", days_ago_iso(5)),
            Message::ai(
                "m-08",
                "Projected FY: base 14.8M, best 16.1M, worst 13.6M.",
                days_ago_iso(5),
            ),
            Message::user("m-09", "Break down by region", days_ago_iso(4)),
        ],
    );

    snapshot.messages_by_id.insert(
        i1.to_string(),
        vec![Message::ai(
            "m-10",
            "Board Meeting recap: approved FY roadmap, cut infra cost by 12%, 5 action items assigned.",
            days_ago_iso(0),
        )
        .with_docs(vec![DocRef {
            id: "DOC-21".to_string(),
            name: "Minutes.pdf".to_string(),
        }])
        .with_follow_ups(vec![
            "Show decisions".to_string(),
            "Who decided what?".to_string(),
            "Attach minutes".to_string(),
        ])],
    );

    snapshot.messages_by_id.insert(
        i2.to_string(),
        vec![Message::ai(
            "m-11",
            "Budget Report Q4 highlights: +9% revenue, +4% cost, net +5%.",
            days_ago_iso(3),
        )
        .with_docs(vec![DocRef {
            id: "DOC-22".to_string(),
            name: "Budget-Q4.xlsx".to_string(),
        }])],
    );

    snapshot.messages_by_id.insert(
        i3.to_string(),
        vec![Message::ai(
            "m-12",
            "Ops Review: NPS 54, uptime 99.93%, focus on onboarding speed.",
            days_ago_iso(20),
        )],
    );

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_consistent() {
        let snap = seed_snapshot();
        assert_eq!(snap.chats.len(), 3);
        assert_eq!(snap.insights.len(), 3);
        // Every chat and insight has a thread.
        for chat in &snap.chats {
            assert!(snap.messages_by_id.contains_key(&chat.id));
        }
        for insight in &snap.insights {
            assert!(snap.messages_by_id.contains_key(&insight.id));
        }
    }
}
