use super::*;

#[test]
fn clean_input_collapses_whitespace() {
    assert_eq!(clean_input("  東京都　新宿区   歌舞伎町 "), "東京都 新宿区 歌舞伎町");
    assert_eq!(clean_input("   "), "");
    assert_eq!(clean_input(""), "");
}

#[test]
fn normalize_folds_full_width_digits_and_dashes() {
    assert_eq!(
        normalize_address("東京都新宿区西新宿２丁目８－１"),
        "東京都新宿区西新宿2丁目8-1"
    );
    assert_eq!(
        normalize_address("大阪府大阪市北区梅田3丁目1―1"),
        "大阪府大阪市北区梅田3丁目1-1"
    );
}

#[test]
fn normalize_treats_prolonged_mark_as_dash_only_between_digits() {
    assert_eq!(
        normalize_address("東京都港区3丁目4ー5"),
        "東京都港区3丁目4-5"
    );
    assert_eq!(
        normalize_address("東京都品川区センタービル"),
        "東京都品川区センタービル"
    );
}

#[test]
fn normalize_treats_half_width_prolonged_mark_like_full_width() {
    assert_eq!(normalize_address("東京都港区3丁目4ｰ5"), "東京都港区3丁目4-5");
    assert_eq!(normalize_address("東京都品川区ｾﾝﾀｰﾋﾞﾙ"), "東京都品川区ｾﾝﾀｰﾋﾞﾙ");
}

#[test]
fn normalize_inserts_block_marker_into_numeric_tail() {
    assert_eq!(
        normalize_address("東京都新宿区歌舞伎町1-1-5"),
        "東京都新宿区歌舞伎町1丁目1-5"
    );
    assert_eq!(
        normalize_address("東京都新宿区歌舞伎町１－１－５－３０１"),
        "東京都新宿区歌舞伎町1丁目1-5-301"
    );
    assert_eq!(
        normalize_address("京都府京都市下京区烏丸通 4-2"),
        "京都府京都市下京区烏丸通4丁目2"
    );
}

#[test]
fn normalize_leaves_existing_block_marker_alone() {
    assert_eq!(
        normalize_address("東京都新宿区歌舞伎町1丁目1-5"),
        "東京都新宿区歌舞伎町1丁目1-5"
    );
}

#[test]
fn normalize_leaves_lone_number_alone() {
    assert_eq!(normalize_address("東京都新宿区歌舞伎町1"), "東京都新宿区歌舞伎町1");
}

#[test]
fn truncate_applies_rules_in_priority_order() {
    assert_eq!(truncate_address("歌舞伎町1丁目1-5-301"), "歌舞伎町1丁目1-5");
    assert_eq!(truncate_address("歌舞伎町1丁目1-5"), "歌舞伎町1丁目1");
    assert_eq!(truncate_address("歌舞伎町1丁目1"), "歌舞伎町1丁目");
    assert_eq!(truncate_address("歌舞伎町1丁目"), "歌舞伎町");
    assert_eq!(truncate_address("丸の内1丁目9番1号"), "丸の内1丁目9番");
    assert_eq!(truncate_address("丸の内1丁目9番"), "丸の内1丁目");
    assert_eq!(truncate_address("本町5番地"), "本町");
}

#[test]
fn truncate_drops_room_and_floor_suffixes() {
    assert_eq!(
        truncate_address("東京都新宿区歌舞伎町1-1-5-301号室"),
        "東京都新宿区歌舞伎町1-1-5"
    );
    assert_eq!(truncate_address("東京都港区六本木6丁目10-1 3階"), "東京都港区六本木6丁目10-1");
    assert_eq!(
        truncate_address("大阪府大阪市北区梅田3-1-1 グランフロント大阪 10F"),
        "大阪府大阪市北区梅田3-1-1 グランフロント大阪"
    );
    assert_eq!(truncate_address("福岡県福岡市中央区天神2-2-12 5Ｆ"), "福岡県福岡市中央区天神2-2-12");
}

#[test]
fn truncate_returns_input_when_no_rule_applies() {
    assert_eq!(truncate_address("東京都新宿区歌舞伎町"), "東京都新宿区歌舞伎町");
    assert_eq!(truncate_address(""), "");
}

#[test]
fn truncate_trims_dangling_space() {
    assert_eq!(truncate_address("東京都新宿区 12"), "東京都新宿区");
}

#[test]
fn truncation_sequence_strictly_shrinks_and_terminates() {
    let inputs = [
        "東京都新宿区歌舞伎町1丁目1-5-301",
        "北海道札幌市中央区北1条西2丁目1番地",
        "東京都新宿区歌舞伎町1-1-5-301号室",
        "大阪府大阪市北区梅田3-1-1 グランフロント大阪 10F",
        "1-2-3-4-5-6-7-8",
        "ビル",
    ];
    for input in inputs {
        let mut current = input.to_string();
        for _ in 0..64 {
            let next = truncate_address(&current);
            if next == current {
                break;
            }
            assert!(
                next.chars().count() < current.chars().count(),
                "{next:?} is not shorter than {current:?}"
            );
            current = next;
        }
        assert_eq!(truncate_address(&current), current, "did not reach a fixpoint for {input}");
    }
}

#[test]
fn addressable_requires_prefecture_and_municipality() {
    assert!(is_addressable("東京都新宿区歌舞伎町"));
    assert!(is_addressable("京都府京都市下京区"));
    assert!(is_addressable("神奈川県横浜市"));
    assert!(is_addressable("北海道虻田郡ニセコ町"));
    assert!(!is_addressable("東京都"));
    assert!(!is_addressable("新宿区歌舞伎町"));
    assert!(!is_addressable("歌舞伎町1丁目"));
}
