//! The fixed tree of sections and their ordered subsections.
//!
//! Each subsection is a single record carrying its label in every locale, so the number and
//! position of subsections cannot drift between languages. The remaining invariants (unique ids,
//! a resolvable default-locale title, complete labels) are checked once in [`Taxonomy::new`], and
//! the canonical content path of each section is computed there too.

use crate::error::TaxonomyError;
use crate::locale::Locale;
use crate::resolve::resolve;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Stable identifier of a top-level section.
pub type SectionId = u8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Auxiliary navigation entry shown alongside a section.
pub struct RelatedLink {
    /// Text shown for the link.
    pub label: String,
    /// Target address.
    pub url: String,
}

#[derive(Debug, Clone, Default)]
/// Unvalidated description of one section, as fed to [`Taxonomy::new`].
pub struct SectionDef {
    /// Stable identifier.
    pub id: SectionId,
    /// Number-prefixed display title per locale, e.g. `"1. Brand Narrative"`.
    pub titles: BTreeMap<Locale, String>,
    /// Subsections in canonical order, each with its label per locale.
    pub subsections: Vec<BTreeMap<Locale, String>>,
    /// Related links in display order.
    pub links: Vec<RelatedLink>,
}

#[derive(Debug, Clone)]
/// A validated top-level section.
pub struct Section {
    id: SectionId,
    titles: BTreeMap<Locale, String>,
    subsections: Vec<BTreeMap<Locale, String>>,
    links: Vec<RelatedLink>,
    canonical_path: String,
}

impl Section {
    #[must_use]
    /// Stable identifier.
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[must_use]
    /// Display title in `locale`, or the default-locale title if the section is not translated.
    pub fn title(&self, locale: Locale) -> &str {
        Self::label_in(&self.titles, locale)
    }

    #[must_use]
    /// Number of subsections; identical for every locale.
    pub fn subsection_count(&self) -> usize {
        self.subsections.len()
    }

    #[must_use]
    /// Label of the subsection at `index` in `locale`.
    pub fn subsection(&self, index: usize, locale: Locale) -> Option<&str> {
        self.subsections
            .get(index)
            .map(|labels| Self::label_in(labels, locale))
    }

    #[must_use]
    /// All subsection labels in `locale`, in canonical order.
    pub fn subsection_titles(&self, locale: Locale) -> Vec<&str> {
        self.subsections
            .iter()
            .map(|labels| Self::label_in(labels, locale))
            .collect()
    }

    #[must_use]
    /// Related links, possibly empty.
    pub fn links(&self) -> &[RelatedLink] {
        &self.links
    }

    #[must_use]
    /// `content/<n>-<slug>.md`, derived from the default-locale title.
    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    #[must_use]
    /// Locales this section is labelled in.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.titles.keys().copied()
    }

    fn label_in(labels: &BTreeMap<Locale, String>, locale: Locale) -> &str {
        labels
            .get(&locale)
            .or_else(|| labels.get(&Locale::default()))
            .map_or("", String::as_str)
    }
}

#[derive(Debug, Clone)]
/// Validated, read-only section tree shared by every session.
pub struct Taxonomy {
    sections: Vec<Section>,
}

impl Taxonomy {
    /// Validate the definitions and compute canonical paths.
    ///
    /// # Errors
    ///
    /// Returns a [`TaxonomyError`] describing the first structural invariant that fails.
    pub fn new(defs: Vec<SectionDef>) -> Result<Self, TaxonomyError> {
        if defs.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut seen = BTreeSet::new();
        let mut sections = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.id) {
                return Err(TaxonomyError::DuplicateId(def.id));
            }
            let default_title = def
                .titles
                .get(&Locale::default())
                .ok_or(TaxonomyError::MissingDefaultTitle(def.id))?;
            if def.subsections.is_empty() {
                return Err(TaxonomyError::NoSubsections(def.id));
            }
            for (index, labels) in def.subsections.iter().enumerate() {
                let declared: BTreeSet<Locale> = def.titles.keys().copied().collect();
                let present: BTreeSet<Locale> = labels.keys().copied().collect();
                if let Some(&locale) = declared.symmetric_difference(&present).next() {
                    return Err(TaxonomyError::MissingSubsectionLabel {
                        section: def.id,
                        index,
                        locale,
                    });
                }
            }
            let canonical_path =
                resolve(default_title).map_err(|source| TaxonomyError::Unresolvable {
                    section: def.id,
                    source,
                })?;

            sections.push(Section {
                id: def.id,
                titles: def.titles,
                subsections: def.subsections,
                links: def.links,
                canonical_path,
            });
        }

        Ok(Self { sections })
    }

    /// The compiled-in brand blueprint taxonomy in English and Korean.
    ///
    /// # Errors
    ///
    /// Returns a [`TaxonomyError`] if the built-in data is malformed.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::new(BUILTIN.iter().map(Seed::to_def).collect())
    }

    #[must_use]
    /// All sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Look a section up by id.
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    #[must_use]
    /// Position of a section in display order.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    #[must_use]
    /// The first section; construction guarantees there is one.
    pub fn first_id(&self) -> SectionId {
        self.sections.first().map_or(0, Section::id)
    }

    #[must_use]
    /// Number of subsections of `id`, or 0 for an unknown id.
    pub fn subsection_count(&self, id: SectionId) -> usize {
        self.get(id).map_or(0, Section::subsection_count)
    }
}

struct Seed {
    id: SectionId,
    title: (&'static str, &'static str),
    subsections: &'static [(&'static str, &'static str)],
    links: &'static [(&'static str, &'static str)],
}

impl Seed {
    fn to_def(&self) -> SectionDef {
        let pair = |(en, ko): (&str, &str)| {
            BTreeMap::from([(Locale::En, en.to_string()), (Locale::Ko, ko.to_string())])
        };
        SectionDef {
            id: self.id,
            titles: pair(self.title),
            subsections: self.subsections.iter().copied().map(pair).collect(),
            links: self
                .links
                .iter()
                .map(|(label, url)| RelatedLink {
                    label: (*label).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
        }
    }
}

const BUILTIN: &[Seed] = &[
    Seed {
        id: 1,
        title: ("1. Brand Narrative", "1. 브랜드 내러티브"),
        subsections: &[
            (
                "Our Story: Who We Are & Why We Exist",
                "우리의 이야기: 우리는 누구이며 왜 존재하는가",
            ),
            ("Mission & Vision", "미션과 비전"),
            ("Strategic Definitions", "전략적 정의"),
            ("Audience Insight", "고객 인사이트"),
        ],
        links: &[],
    },
    Seed {
        id: 2,
        title: ("2. Brand Voice and Messaging", "2. 브랜드 보이스와 메시지"),
        subsections: &[
            ("Brand Voice Framework", "브랜드 보이스 프레임워크"),
            ("Voice Dos and Donts", "보이스 권장 및 금지 사항"),
            ("Sample Messaging per Channel", "채널별 메시지 예시"),
            ("Brand Language Guide", "브랜드 언어 가이드"),
        ],
        links: &[],
    },
    Seed {
        id: 3,
        title: ("3. Visual Identity System", "3. 비주얼 아이덴티티 시스템"),
        subsections: &[
            ("Logo Suite", "로고 구성"),
            ("Typography System", "타이포그래피 시스템"),
            ("Color Strategy", "컬러 전략"),
            ("Layout & Grid Systems", "레이아웃 및 그리드 시스템"),
            ("Motifs & Accent Visuals", "모티프 및 강조 비주얼"),
        ],
        links: &[
            ("Google Fonts", "https://fonts.google.com"),
            ("Pantone", "https://www.pantone.com"),
        ],
    },
    Seed {
        id: 4,
        title: (
            "4. Product Structure & Architecture",
            "4. 제품 구조 및 아키텍처",
        ),
        subsections: &[
            ("Product Tiers", "제품 등급"),
            ("Tier Attributes", "등급별 속성"),
            ("Origin Integration", "원산지 통합"),
            ("Visual Tier Coding", "등급 시각 코딩"),
        ],
        links: &[("Specialty Coffee Association", "https://sca.coffee")],
    },
    Seed {
        id: 5,
        title: ("5. Brand Assets", "5. 브랜드 자산"),
        subsections: &[
            ("Logo Files", "로고 파일"),
            ("Color Codes & Style Swatches", "컬러 코드 및 스타일 견본"),
            ("Label Templates", "라벨 템플릿"),
            ("Social Media Templates", "소셜 미디어 템플릿"),
            (
                "Coffee Catalog & Offer Sheet Templates",
                "커피 카탈로그 및 오퍼 시트 템플릿",
            ),
            (
                "Email Signatures, Presentation Decks",
                "이메일 서명, 프레젠테이션 자료",
            ),
        ],
        links: &[],
    },
    Seed {
        id: 6,
        title: ("6. Key Brand Touchpoints", "6. 주요 브랜드 접점"),
        subsections: &[
            (
                "B2B Website Layout Guidelines",
                "B2B 웹사이트 레이아웃 가이드라인",
            ),
            (
                "Green Coffee Bag Design (tier variations)",
                "생두 포대 디자인 (등급별 변형)",
            ),
            ("Roaster Welcome Kit", "로스터 웰컴 키트"),
            (
                "Cupping Cards & Traceability Sheets",
                "커핑 카드 및 이력 추적 시트",
            ),
            ("Social Media Brand Experience", "소셜 미디어 브랜드 경험"),
            ("Event / Pop-up Signage System", "이벤트 / 팝업 사이니지 시스템"),
        ],
        links: &[],
    },
    Seed {
        id: 7,
        title: ("7. Brand Guidelines", "7. 브랜드 가이드라인"),
        subsections: &[
            (
                "Full PDF Manual (Visual + Verbal)",
                "전체 PDF 매뉴얼 (비주얼 + 언어)",
            ),
            ("Internal Values Summary", "내부 가치 요약"),
            ("Brand Book Slide Deck", "브랜드북 슬라이드 자료"),
            ("Optional: Korean-language version", "선택 사항: 한국어 버전"),
            (
                "Ongoing update log (versioning + approvals)",
                "업데이트 기록 (버전 관리 + 승인)",
            ),
        ],
        links: &[],
    },
];

#[cfg(test)]
#[path = "tests/taxonomy.rs"]
mod tests;
