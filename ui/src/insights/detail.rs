use dioxus::prelude::*;

use super::Insight;
use crate::core::files::FileStore;
use crate::core::format::format_card_date;
use crate::core::spreadsheet::file_as_csv;

/// Detail panel for the selected card: the full summary plus the attached
/// dataset, reflowed to CSV and rendered as a table.
#[component]
pub fn DetailPanel(
    records: Vec<Insight>,
    files: FileStore,
    selected: Signal<Option<String>>,
) -> Element {
    let mut selected_signal = selected;
    let active = selected();
    let record = active
        .as_ref()
        .and_then(|slug| records.iter().find(|record| &record.slug == slug));

    let Some(record) = record else {
        return rsx! {
            aside { class: "insight-detail insight-detail--empty",
                p { class: "insight-detail__placeholder",
                    "Select a card to read the full insight."
                }
            }
        };
    };

    let date_label = format_card_date(&record.date);

    rsx! {
        aside { class: "insight-detail",
            div { class: "insight-detail__header",
                h2 { "{record.title}" }
                button {
                    r#type: "button",
                    class: "insight-detail__close",
                    onclick: move |_| selected_signal.set(None),
                    "Close"
                }
            }

            p { class: "insight-detail__meta",
                "{date_label}"
                if let Some(author) = record.author.as_ref() {
                    " · by {author}"
                }
            }

            p { class: "insight-detail__body", "{record.summary}" }

            if let Some(name) = record.attachment.as_ref() {
                {render_dataset(name, file_as_csv(&files, name))}
            }
        }
    }
}

fn render_dataset(name: &str, csv_text: String) -> Element {
    if csv_text.is_empty() {
        // The normalizer erases decode failures to an empty string, so this
        // covers both missing files and unreadable ones.
        return rsx! {
            div { class: "insight-dataset",
                h3 { "Dataset: {name}" }
                p { class: "insight-dataset__placeholder", "No data available." }
            }
        };
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(csv_text.as_bytes());
    let rows: Vec<Vec<String>> = reader
        .records()
        .filter_map(|record| record.ok())
        .map(|record| record.iter().map(str::to_string).collect())
        .collect();

    let header = rows.first().cloned().unwrap_or_default();
    let body: Vec<Vec<String>> = rows.into_iter().skip(1).collect();

    rsx! {
        div { class: "insight-dataset",
            h3 { "Dataset: {name}" }
            table { class: "insight-dataset__table",
                thead {
                    tr {
                        for cell in header.iter() {
                            th { "{cell}" }
                        }
                    }
                }
                tbody {
                    for (index, row) in body.into_iter().enumerate() {
                        tr { key: "{index}",
                            for cell in row.into_iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
