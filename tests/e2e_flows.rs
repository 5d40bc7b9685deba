use serde_json::Value;

mod common;
use common::TestEnv;

fn oks<'a>(events: &'a [Value], action: &str) -> Vec<&'a Value> {
    events
        .iter()
        .filter(|e| e["ok"] == true && e["action"] == action)
        .collect()
}

#[test]
fn guest_quota_blocks_eleventh_scan() {
    let env = TestEnv::new();
    let mut script = String::from("guest\n");
    for _ in 0..11 {
        script.push_str("scan\n");
    }
    script.push_str("history\nquit\n");

    let events = env.run_session_json(&script);
    assert_eq!(events.len(), 13);

    assert_eq!(events[0]["action"], "guest");
    assert_eq!(events[0]["data"]["remaining_scans"], 10);

    let scans = oks(&events, "scan");
    assert_eq!(scans.len(), 10);
    for s in &scans {
        let risk = s["data"]["risk"].as_u64().expect("risk integer");
        assert!((1..=99).contains(&risk));
        assert_eq!(s["data"]["is_real"], false);
    }

    let blocked = &events[11];
    assert_eq!(blocked["ok"], false);
    assert_eq!(blocked["error"]["code"], "QUOTA_EXCEEDED");

    let history = &events[12];
    assert_eq!(history["action"], "history");
    assert_eq!(
        history["data"].as_array().expect("history array").len(),
        10,
        "blocked scan must not append history"
    );
}

#[test]
fn unauthenticated_scan_requires_signin() {
    let env = TestEnv::new();
    let events = env.run_session_json("scan\nquit\n");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["ok"], false);
    assert_eq!(events[0]["error"]["code"], "SIGNIN_REQUIRED");
}

#[test]
fn signed_in_scans_pass_the_guest_quota() {
    let env = TestEnv::new();
    let mut script = String::from("signin sarah\n");
    for _ in 0..12 {
        script.push_str("scan\n");
    }
    script.push_str("summary\nquit\n");

    let events = env.run_session_json(&script);
    assert_eq!(oks(&events, "scan").len(), 12);

    let summary = events.last().expect("summary event");
    assert_eq!(summary["action"], "summary");
    assert_eq!(summary["data"]["scan_count"], 12);
}

#[test]
fn mock_scan_fields_come_from_candidate_pools() {
    let env = TestEnv::new();
    let events = env.run_session_json("guest\nscan\nquit\n");
    let scan = &events[1];
    assert_eq!(scan["ok"], true);
    let material = scan["data"]["material"].as_str().expect("material");
    assert!(
        ["Cotton", "Polyester", "Rayon", "Organic Cotton", "Nylon"].contains(&material),
        "unexpected mock material {material}"
    );
    let origin = scan["data"]["origin"].as_str().expect("origin");
    assert!(origin.starts_with("Made in"));
}

#[test]
fn board_is_premium_gated_and_subscribe_unlocks() {
    let env = TestEnv::new();
    let events = env.run_session_json("signin\nboard\nsubscribe\nboard\nquit\n");
    assert_eq!(events.len(), 4);
    assert_eq!(events[1]["ok"], false);
    assert_eq!(events[1]["error"]["code"], "PREMIUM_REQUIRED");
    assert_eq!(events[2]["data"]["tier"], "premium");
    assert_eq!(events[3]["ok"], true);
    assert_eq!(events[3]["data"]["challenge"], "Weekly Challenge: Denim");
}

#[test]
fn donations_require_signin() {
    let env = TestEnv::new();
    let guest = env.run_session_json("guest\ndonate unseen\nquit\n");
    assert_eq!(guest[1]["ok"], false);
    assert_eq!(guest[1]["error"]["code"], "SIGNIN_REQUIRED");

    let member = env.run_session_json("signin\ndonate unseen 10\nquit\n");
    assert_eq!(member[1]["ok"], true);
    assert_eq!(member[1]["data"]["status"], "thank_you");
    assert_eq!(member[1]["data"]["amount"], 10.0);
}

#[test]
fn buying_is_blocked_for_guests_but_not_members() {
    let env = TestEnv::new();
    let guest = env.run_session_json("guest\nbuy upcycled-tee\nquit\n");
    assert_eq!(guest[1]["ok"], false);
    assert_eq!(guest[1]["error"]["code"], "SIGNIN_REQUIRED");

    let member = env.run_session_json("signin\nbuy upcycled-tee\nquit\n");
    assert_eq!(member[1]["data"]["status"], "added_to_cart");
}

#[test]
fn style_preferences_drive_recommendations() {
    let env = TestEnv::new();
    let events = env.run_session_json("signin\nstyles Streetwear\nrecommend\nquit\n");
    let recs = &events[2];
    assert_eq!(recs["ok"], true);
    let rows = recs["data"].as_array().expect("recommendation rows");
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["style"], "Streetwear");
        assert_eq!(row["score"], 3);
    }
}

#[test]
fn logout_resets_quota_and_history() {
    let env = TestEnv::new();
    let events = env.run_session_json("guest\nscan\nlogout\nguest\nhistory\nquit\n");
    assert_eq!(events[2]["action"], "logout");
    assert_eq!(events[3]["data"]["remaining_scans"], 10);
    assert_eq!(
        events[4]["data"].as_array().expect("history array").len(),
        0
    );
}

#[test]
fn one_shot_recommend_falls_back_to_k_distinct_items() {
    let env = TestEnv::new();
    let out = env.run_json(&["recommend", "-k", "3"]);
    assert_eq!(out["ok"], true);
    let rows = out["data"].as_array().expect("rows");
    assert_eq!(rows.len(), 3);
    let ids: std::collections::HashSet<&str> = rows
        .iter()
        .map(|r| r["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids.len(), 3, "fallback items must be distinct");
}
