use dioxus::prelude::*;
use tonle_ui::{
    use_scroll_reveal, PageContainer, PageHeader, RevealSection, TeamHero, TeamStat, ValuePanel,
};

const SECTIONS: &[&str] = &["team", "values"];

#[component]
pub fn About() -> Element {
    let reveal = use_scroll_reveal(SECTIONS);

    let stats = vec![
        TeamStat {
            value: "១២០+".to_string(),
            label_km: "បុគ្គលិក".to_string(),
            label_en: "Staff members".to_string(),
        },
        TeamStat {
            value: "១៥".to_string(),
            label_km: "ឆ្នាំនៃសេវាកម្ម".to_string(),
            label_en: "Years of service".to_string(),
        },
        TeamStat {
            value: "៨៥,០០០".to_string(),
            label_km: "ការតភ្ជាប់".to_string(),
            label_en: "Connections".to_string(),
        },
    ];

    rsx! {
        PageContainer {
            PageHeader {
                title_km: "អំពីយើង",
                title_en: "About Us",
                subtitle: "ស្គាល់ក្រុមការងារ និងគុណតម្លៃ ដែលនាំទឹកស្អាតដល់ផ្ទះរបស់អ្នក",
            }

            RevealSection { handle: reveal, section: "team", class: Some("mb-12".to_string()),
                TeamHero {
                    heading_km: "ក្រុមការងាររបស់យើង",
                    heading_en: "Our Team",
                    blurb: "វិស្វករ អ្នកបច្ចេកទេស និងបុគ្គលិកសេវាអតិថិជន ធ្វើការគ្រប់ម៉ោង ដើម្បីរក្សាលំហូរទឹកស្អាត។ Engineers, technicians and customer-service staff keep clean water flowing around the clock.",
                    stats,
                }
            }

            RevealSection { handle: reveal, section: "values",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                    ValuePanel {
                        heading_km: "គុណភាពជាអាទិភាព",
                        heading_en: "Quality First",
                        body_km: "មន្ទីរពិសោធន៍របស់យើងវិភាគសំណាកទឹកជារៀងរាល់ថ្ងៃ ពីរោងចក្រប្រព្រឹត្តកម្មរហូតដល់ក្បាលរ៉ូប៊ីណេ។",
                        body_en: "Our laboratory samples water every day, from the treatment plant to the tap.",
                    }
                    ValuePanel {
                        heading_km: "បម្រើសហគមន៍",
                        heading_en: "Serving the Community",
                        body_km: "យើងពង្រីកបណ្ដាញទៅតំបន់ជាយក្រុង និងផ្ដល់តម្លៃពិសេសដល់គ្រួសារដែលមានចំណូលទាប។",
                        body_en: "We extend the network to peri-urban areas and subsidize connections for low-income families.",
                    }
                }
            }
        }
    }
}
