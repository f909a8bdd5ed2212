//! Built-in default records, one per language. Served whenever no record has
//! been persisted for a language, and after a reset.

use crate::content::models::{
    CareerRecord, CertificationRecord, ContactLink, ContentRecord, Language, LectureRecord,
    Profile, ProjectCategory, ProjectRecord, SkillCategory, SCHEMA_VERSION,
};

pub fn default_record(language: Language) -> ContentRecord {
    match language {
        Language::Ko => default_ko(),
        Language::En => default_en(),
        Language::Ja => default_ja(),
    }
}

fn default_ko() -> ContentRecord {
    ContentRecord {
        schema_version: SCHEMA_VERSION,
        profile: Profile {
            name: "박지후".to_string(),
            english_name: "Jihu Park".to_string(),
            email: "jihu.park@example.com".to_string(),
            phone: "010-0000-0000".to_string(),
            summary: "데이터 기반 의사결정을 돕는 디지털 마케팅 컨설턴트입니다. \
                      검색 광고, 콘텐츠 전략, 측정 설계 전반을 다룹니다."
                .to_string(),
            links: vec![
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/jihu-park-example".to_string(),
                },
                ContactLink {
                    label: "Blog".to_string(),
                    url: "https://blog.example.com".to_string(),
                },
            ],
        },
        projects: vec![
            ProjectRecord {
                id: "seed-project-1".to_string(),
                client: "한빛유통".to_string(),
                role: "디지털 마케팅 컨설턴트".to_string(),
                period: "2024.03 - 2024.08".to_string(),
                description: "이커머스 채널 통합과 검색 광고 효율화 컨설팅".to_string(),
                tasks: vec![
                    "검색 광고 계정 구조 재설계".to_string(),
                    "전환 추적 체계 구축".to_string(),
                    "월간 성과 리포트 자동화".to_string(),
                ],
                results: Some(vec!["광고 수익률 42% 개선".to_string()]),
                tags: vec!["SEM".to_string(), "GA4".to_string()],
                category: ProjectCategory::Consulting,
            },
            ProjectRecord {
                id: "seed-project-2".to_string(),
                client: "모아금융".to_string(),
                role: "콘텐츠 전략 리드".to_string(),
                period: "2023.05 - 2023.12".to_string(),
                description: "금융 서비스 블로그의 콘텐츠 전략 수립과 운영".to_string(),
                tasks: vec![
                    "콘텐츠 캘린더 설계".to_string(),
                    "SEO 기반 주제 발굴".to_string(),
                ],
                results: None,
                tags: vec!["SEO".to_string(), "콘텐츠".to_string()],
                category: ProjectCategory::Project,
            },
        ],
        career_history: vec![CareerRecord {
            id: "seed-career-1".to_string(),
            company: "브릿지컴퍼니".to_string(),
            role: "마케팅 팀장".to_string(),
            period: "2019.01 - 2023.04".to_string(),
            employment_type: "정규직".to_string(),
            description: Some("퍼포먼스 마케팅 조직 리딩".to_string()),
            details: vec![
                "연간 미디어 예산 운용".to_string(),
                "주니어 마케터 멘토링".to_string(),
            ],
        }],
        skills: vec![
            SkillCategory {
                name: "마케팅 채널".to_string(),
                items: vec![
                    "검색 광고".to_string(),
                    "소셜 미디어".to_string(),
                    "CRM".to_string(),
                ],
            },
            SkillCategory {
                name: "분석 도구".to_string(),
                items: vec!["GA4".to_string(), "Looker Studio".to_string()],
            },
        ],
        certifications: vec![CertificationRecord {
            name: "구글 애널리틱스 자격증".to_string(),
            date: "2022.11".to_string(),
            issuer: Some("Google".to_string()),
        }],
        lectures: vec![LectureRecord {
            id: "seed-lecture-1".to_string(),
            title: "데이터 기반 마케팅 입문".to_string(),
            organizer: "서울창업허브".to_string(),
            period: "2024.06".to_string(),
            role: "강사".to_string(),
            description: "실무자를 위한 GA4 활용 강의".to_string(),
            details: vec![
                "측정 설계 실습".to_string(),
                "대시보드 구축".to_string(),
            ],
            tags: vec!["GA4".to_string(), "교육".to_string()],
        }],
    }
}

fn default_en() -> ContentRecord {
    ContentRecord {
        schema_version: SCHEMA_VERSION,
        profile: Profile {
            name: "박지후".to_string(),
            english_name: "Jihu Park".to_string(),
            email: "jihu.park@example.com".to_string(),
            phone: "010-0000-0000".to_string(),
            summary: "Digital marketing consultant focused on data-driven decision making, \
                      covering paid search, content strategy, and measurement design."
                .to_string(),
            links: vec![
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/jihu-park-example".to_string(),
                },
                ContactLink {
                    label: "Blog".to_string(),
                    url: "https://blog.example.com".to_string(),
                },
            ],
        },
        projects: vec![
            ProjectRecord {
                id: "seed-project-1".to_string(),
                client: "Hanbit Distribution".to_string(),
                role: "Digital Marketing Consultant".to_string(),
                period: "2024.03 - 2024.08".to_string(),
                description: "E-commerce channel consolidation and paid search efficiency consulting"
                    .to_string(),
                tasks: vec![
                    "Restructured paid search account architecture".to_string(),
                    "Built conversion tracking framework".to_string(),
                    "Automated monthly performance reporting".to_string(),
                ],
                results: Some(vec!["Improved return on ad spend by 42%".to_string()]),
                tags: vec!["SEM".to_string(), "GA4".to_string()],
                category: ProjectCategory::Consulting,
            },
            ProjectRecord {
                id: "seed-project-2".to_string(),
                client: "Moa Financial".to_string(),
                role: "Content Strategy Lead".to_string(),
                period: "2023.05 - 2023.12".to_string(),
                description: "Content strategy and operations for a financial services blog"
                    .to_string(),
                tasks: vec![
                    "Designed the editorial calendar".to_string(),
                    "Identified SEO-driven topics".to_string(),
                ],
                results: None,
                tags: vec!["SEO".to_string(), "콘텐츠".to_string()],
                category: ProjectCategory::Project,
            },
        ],
        career_history: vec![CareerRecord {
            id: "seed-career-1".to_string(),
            company: "Bridge Company".to_string(),
            role: "Marketing Team Lead".to_string(),
            period: "2019.01 - 2023.04".to_string(),
            employment_type: "정규직".to_string(),
            description: Some("Led the performance marketing team".to_string()),
            details: vec![
                "Managed the annual media budget".to_string(),
                "Mentored junior marketers".to_string(),
            ],
        }],
        skills: vec![
            SkillCategory {
                name: "Marketing Channels".to_string(),
                items: vec![
                    "Paid Search".to_string(),
                    "Social Media".to_string(),
                    "CRM".to_string(),
                ],
            },
            SkillCategory {
                name: "Analytics Tools".to_string(),
                items: vec!["GA4".to_string(), "Looker Studio".to_string()],
            },
        ],
        certifications: vec![CertificationRecord {
            name: "Google Analytics Certification".to_string(),
            date: "2022.11".to_string(),
            issuer: Some("Google".to_string()),
        }],
        lectures: vec![LectureRecord {
            id: "seed-lecture-1".to_string(),
            title: "Introduction to Data-Driven Marketing".to_string(),
            organizer: "Seoul Startup Hub".to_string(),
            period: "2024.06".to_string(),
            role: "Instructor".to_string(),
            description: "Hands-on GA4 course for practitioners".to_string(),
            details: vec![
                "Measurement design workshop".to_string(),
                "Dashboard building".to_string(),
            ],
            tags: vec!["GA4".to_string(), "교육".to_string()],
        }],
    }
}

fn default_ja() -> ContentRecord {
    ContentRecord {
        schema_version: SCHEMA_VERSION,
        profile: Profile {
            name: "박지후".to_string(),
            english_name: "Jihu Park".to_string(),
            email: "jihu.park@example.com".to_string(),
            phone: "010-0000-0000".to_string(),
            summary: "データに基づく意思決定を支援するデジタルマーケティングコンサルタント。\
                      検索広告、コンテンツ戦略、計測設計を担当します。"
                .to_string(),
            links: vec![
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/jihu-park-example".to_string(),
                },
                ContactLink {
                    label: "Blog".to_string(),
                    url: "https://blog.example.com".to_string(),
                },
            ],
        },
        projects: vec![
            ProjectRecord {
                id: "seed-project-1".to_string(),
                client: "ハンビット流通".to_string(),
                role: "デジタルマーケティングコンサルタント".to_string(),
                period: "2024.03 - 2024.08".to_string(),
                description: "ECチャネル統合と検索広告の効率化コンサルティング".to_string(),
                tasks: vec![
                    "検索広告アカウント構造の再設計".to_string(),
                    "コンバージョン計測体系の構築".to_string(),
                    "月次レポートの自動化".to_string(),
                ],
                results: Some(vec!["広告収益率を42%改善".to_string()]),
                tags: vec!["SEM".to_string(), "GA4".to_string()],
                category: ProjectCategory::Consulting,
            },
            ProjectRecord {
                id: "seed-project-2".to_string(),
                client: "モア金融".to_string(),
                role: "コンテンツ戦略リード".to_string(),
                period: "2023.05 - 2023.12".to_string(),
                description: "金融サービスブログのコンテンツ戦略策定と運用".to_string(),
                tasks: vec![
                    "コンテンツカレンダーの設計".to_string(),
                    "SEOに基づくテーマ発掘".to_string(),
                ],
                results: None,
                tags: vec!["SEO".to_string(), "콘텐츠".to_string()],
                category: ProjectCategory::Project,
            },
        ],
        career_history: vec![CareerRecord {
            id: "seed-career-1".to_string(),
            company: "ブリッジカンパニー".to_string(),
            role: "マーケティングチームリーダー".to_string(),
            period: "2019.01 - 2023.04".to_string(),
            employment_type: "정규직".to_string(),
            description: Some("パフォーマンスマーケティング組織のリード".to_string()),
            details: vec![
                "年間メディア予算の運用".to_string(),
                "ジュニアマーケターの育成".to_string(),
            ],
        }],
        skills: vec![
            SkillCategory {
                name: "マーケティングチャネル".to_string(),
                items: vec![
                    "検索広告".to_string(),
                    "ソーシャルメディア".to_string(),
                    "CRM".to_string(),
                ],
            },
            SkillCategory {
                name: "分析ツール".to_string(),
                items: vec!["GA4".to_string(), "Looker Studio".to_string()],
            },
        ],
        certifications: vec![CertificationRecord {
            name: "Googleアナリティクス認定資格".to_string(),
            date: "2022.11".to_string(),
            issuer: Some("Google".to_string()),
        }],
        lectures: vec![LectureRecord {
            id: "seed-lecture-1".to_string(),
            title: "データドリブンマーケティング入門".to_string(),
            organizer: "ソウル創業ハブ".to_string(),
            period: "2024.06".to_string(),
            role: "講師".to_string(),
            description: "実務者向けGA4活用講義".to_string(),
            details: vec![
                "計測設計の実習".to_string(),
                "ダッシュボード構築".to_string(),
            ],
            tags: vec!["GA4".to_string(), "교육".to_string()],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_share_ids_across_languages() {
        let ko = default_record(Language::Ko);
        let en = default_record(Language::En);
        let ja = default_record(Language::Ja);

        for other in [&en, &ja] {
            assert_eq!(ko.projects.len(), other.projects.len());
            for (a, b) in ko.projects.iter().zip(&other.projects) {
                assert_eq!(a.id, b.id);
                assert_eq!(a.period, b.period);
            }
        }
    }

    #[test]
    fn test_defaults_are_distinct_per_language() {
        let ko = default_record(Language::Ko);
        let en = default_record(Language::En);
        assert_ne!(ko.profile.summary, en.profile.summary);
    }

    #[test]
    fn test_defaults_carry_current_schema_version() {
        for language in Language::all() {
            assert_eq!(default_record(language).schema_version, SCHEMA_VERSION);
        }
    }
}
