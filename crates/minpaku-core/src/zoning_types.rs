//! The 13 statutory use-area (用途地域) categories and their short-term-rental rules.
//!
//! Static reference data: built at compile time, never mutated. Every category
//! carries the minpaku (住宅宿泊事業法) and ryokan (旅館業法, 簡易宿所) permit
//! status that downstream reporting needs.

use serde::Serialize;

/// Whether an operating form is permitted inside a zoning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitStatus {
    Allowed,
    Conditional,
    Restricted,
}

impl PermitStatus {
    /// Japanese display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Allowed => "✅ 原則OK",
            Self::Conditional => "⚠️ 条件付き",
            Self::Restricted => "❌ 不可",
        }
    }

    /// Badge color as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Allowed => "#22c55e",
            Self::Conditional => "#eab308",
            Self::Restricted => "#ef4444",
        }
    }
}

/// One use-area category.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoningCategory {
    /// Short stable code, e.g. `"1SR"`.
    pub code: &'static str,
    /// Statutory name, e.g. `"第一種低層住居専用地域"`.
    pub name: &'static str,
    pub description: &'static str,
    pub minpaku_status: PermitStatus,
    pub ryokan_status: PermitStatus,
    pub minpaku_detail: &'static str,
    /// Map display color.
    pub color: &'static str,
    /// Typical building uses.
    pub main_use: &'static str,
}

pub static ZONING_CATEGORIES: [ZoningCategory; 13] = [
    ZoningCategory {
        code: "1SR",
        name: "第一種低層住居専用地域",
        description: "低層住宅の良好な環境を守るための地域。建物の高さが10mまたは12mに制限。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅宿泊事業法に基づく届出制で営業可能（年間180日以内）。ただし自治体条例で区域制限・日数制限がかかる場合あり。旅館業法による簡易宿所は原則不可。",
        color: "#40B882",
        main_use: "戸建住宅、小規模店舗兼用住宅",
    },
    ZoningCategory {
        code: "2SR",
        name: "第二種低層住居専用地域",
        description: "主に低層住宅の環境を守る地域。小規模な店舗（150㎡以下）が可能。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅宿泊事業法に基づく届出制で営業可能（年間180日以内）。自治体条例による制限あり。旅館業法による簡易宿所は原則不可。",
        color: "#60D394",
        main_use: "戸建住宅、小規模店舗",
    },
    ZoningCategory {
        code: "1MR",
        name: "第一種中高層住居専用地域",
        description: "中高層住宅の環境を守る地域。大学・病院・500㎡以下の店舗が可能。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅宿泊事業法に基づく届出制で営業可能（年間180日以内）。自治体条例による制限あり。旅館業法は原則不可だが、特例許可の場合あり。",
        color: "#AAF683",
        main_use: "マンション、アパート、大学、病院",
    },
    ZoningCategory {
        code: "2MR",
        name: "第二種中高層住居専用地域",
        description: "主に中高層住宅の環境を守る地域。1,500㎡以下の店舗・事務所が可能。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Conditional,
        minpaku_detail: "住宅宿泊事業法に基づく届出制で営業可能。旅館業法も条件付きで可能な場合あり。自治体条例による制限確認要。",
        color: "#CCE49A",
        main_use: "マンション、中規模店舗、事務所",
    },
    ZoningCategory {
        code: "1JR",
        name: "第一種住居地域",
        description: "住居の環境を守るための地域。3,000㎡以下のホテル・旅館が可能。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Conditional,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに営業しやすい地域。ホテル・旅館も条件付きで建築可能。自治体条例は要確認。",
        color: "#F9C846",
        main_use: "住宅、ホテル（小規模）、店舗",
    },
    ZoningCategory {
        code: "2JR",
        name: "第二種住居地域",
        description: "主に住居の環境を守る地域。ホテル・旅館・パチンコ店等も可能。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Allowed,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに原則営業可能。ホテル・旅館の建築も可能。最も民泊に適した住居系用途地域の一つ。",
        color: "#F5A623",
        main_use: "住宅、ホテル、カラオケ、パチンコ",
    },
    ZoningCategory {
        code: "JNR",
        name: "準住居地域",
        description: "道路の沿道にふさわしい業務と住居の調和を図る地域。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Allowed,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに原則営業可能。国道沿い等に多く、アクセスの良さを活かした民泊に好適。",
        color: "#E8963A",
        main_use: "住宅、自動車関連施設、ホテル",
    },
    ZoningCategory {
        code: "TSJ",
        name: "田園住居地域",
        description: "農業の利便性と住居環境の調和を図る地域（2018年新設）。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅宿泊事業法による営業は可能だが、農村環境保全のため自治体条例で厳しい制限がかかる可能性あり。農家民泊（農泊）とは異なる法的位置づけ。",
        color: "#86C166",
        main_use: "住宅、農業用施設、農産物直売所",
    },
    ZoningCategory {
        code: "KNC",
        name: "近隣商業地域",
        description: "近隣住民のための商業施設が集まる地域。日用品の買い物等に便利。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Allowed,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに原則営業可能。商業エリアのため、周辺に買い物・飲食施設が充実。集客力のある民泊に好適。",
        color: "#F06292",
        main_use: "商店街、スーパー、飲食店、ホテル",
    },
    ZoningCategory {
        code: "SYG",
        name: "商業地域",
        description: "銀行・映画館・百貨店等が集まる都市の中心部。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Allowed,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに最も営業しやすい地域。大規模ホテルも建築可能。繁華街・ターミナル駅周辺に多い。",
        color: "#E53935",
        main_use: "デパート、オフィスビル、ホテル、映画館",
    },
    ZoningCategory {
        code: "JKG",
        name: "準工業地域",
        description: "主に軽工業の工場等、環境悪化の恐れのない工場が立地する地域。",
        minpaku_status: PermitStatus::Allowed,
        ryokan_status: PermitStatus::Allowed,
        minpaku_detail: "住宅宿泊事業法・旅館業法ともに営業可能。倉庫リノベーション等のユニークな民泊に活用されるケースもあり。",
        color: "#AB47BC",
        main_use: "軽工場、住宅、店舗、倉庫",
    },
    ZoningCategory {
        code: "KGY",
        name: "工業地域",
        description: "どんな工場でも建てられる地域。住宅・店舗も建築可能。",
        minpaku_status: PermitStatus::Conditional,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅宿泊事業法による届出は可能だが、ホテル・旅館の建築は制限。周辺環境（騒音・臭気等）に留意が必要。自治体条例で追加制限の場合あり。",
        color: "#7E57C2",
        main_use: "工場、倉庫、住宅（制限あり）",
    },
    ZoningCategory {
        code: "KGS",
        name: "工業専用地域",
        description: "工場のためだけの地域。住宅・店舗・学校・病院等は建てられない。",
        minpaku_status: PermitStatus::Restricted,
        ryokan_status: PermitStatus::Restricted,
        minpaku_detail: "住宅の建築自体が禁止されているため、住宅宿泊事業法による民泊は不可。旅館業法による営業も不可。民泊営業はできません。",
        color: "#546E7A",
        main_use: "大規模工場のみ",
    },
];

/// Looks up a category by its short code.
#[must_use]
pub fn zoning_by_code(code: &str) -> Option<&'static ZoningCategory> {
    ZONING_CATEGORIES.iter().find(|z| z.code == code)
}

/// Returns the first category whose name contains `name`.
#[must_use]
pub fn zoning_by_name(name: &str) -> Option<&'static ZoningCategory> {
    if name.is_empty() {
        return None;
    }
    ZONING_CATEGORIES.iter().find(|z| z.name.contains(name))
}

/// Link to the public use-area map centred on the given coordinate.
///
/// Always available, so callers can fall back to manual lookup.
#[must_use]
pub fn external_map_url(lat: f64, lon: f64) -> String {
    format!("https://cityzone.mapexpert.net/?ll={lat},{lon}&z=16")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn codes_and_names_are_unique() {
        let codes: HashSet<_> = ZONING_CATEGORIES.iter().map(|z| z.code).collect();
        let names: HashSet<_> = ZONING_CATEGORIES.iter().map(|z| z.name).collect();
        assert_eq!(codes.len(), 13);
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn zoning_by_code_finds_every_category() {
        for category in &ZONING_CATEGORIES {
            assert_eq!(zoning_by_code(category.code), Some(category));
        }
        assert_eq!(zoning_by_code("XXX"), None);
    }

    #[test]
    fn zoning_by_name_matches_substring() {
        assert_eq!(zoning_by_name("工業専用").map(|z| z.code), Some("KGS"));
        assert_eq!(zoning_by_name("田園").map(|z| z.code), Some("TSJ"));
        assert_eq!(zoning_by_name(""), None);
    }

    #[test]
    fn industrial_exclusive_zone_forbids_minpaku() {
        let kgs = zoning_by_code("KGS").unwrap();
        assert_eq!(kgs.minpaku_status, PermitStatus::Restricted);
        assert_eq!(kgs.minpaku_status.label(), "❌ 不可");
    }

    #[test]
    fn status_labels_and_colors() {
        assert_eq!(PermitStatus::Allowed.label(), "✅ 原則OK");
        assert_eq!(PermitStatus::Conditional.label(), "⚠️ 条件付き");
        assert_eq!(PermitStatus::Allowed.color(), "#22c55e");
        assert_eq!(PermitStatus::Restricted.color(), "#ef4444");
    }

    #[test]
    fn category_serializes_camel_case() {
        let json = serde_json::to_value(zoning_by_code("1SR").unwrap()).unwrap();
        assert_eq!(json["code"], "1SR");
        assert_eq!(json["minpakuStatus"], "conditional");
        assert_eq!(json["ryokanStatus"], "restricted");
        assert!(json["mainUse"].is_string());
    }

    #[test]
    fn external_map_url_embeds_coordinates() {
        assert_eq!(
            external_map_url(35.6938, 139.7029),
            "https://cityzone.mapexpert.net/?ll=35.6938,139.7029&z=16"
        );
    }
}
