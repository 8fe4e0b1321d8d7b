use anyhow::Result;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

use senusa_dashboard::columns::labels;
use senusa_dashboard::{Dashboard, Summary};

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";

fn is_selected(dashboard: &Dashboard, row: usize) -> bool {
    dashboard
        .selection()
        .is_some_and(|selection| selection.is_selected(row))
}

pub fn print_results_table(dashboard: &Dashboard) {
    let mut builder = Builder::default();

    let mut header = vec!["#".to_string(), "Selected".to_string()];
    header.extend(labels().into_iter().map(String::from));
    builder.push_record(header);

    for (i, row) in dashboard.rows().into_iter().enumerate() {
        let mark = match is_selected(dashboard, i) {
            true => SELECTED_MARK,
            false => UNSELECTED_MARK,
        };
        let mut record = vec![i.to_string(), mark.to_string()];
        record.extend(row);
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern());

    println!("{}", table);
    println!("Number of annotated variants: {}", dashboard.results().len());
}

pub fn print_results_tsv(dashboard: &Dashboard) {
    println!("index\tselected\t{}", labels().join("\t"));
    for (i, row) in dashboard.rows().into_iter().enumerate() {
        println!(
            "{}\t{}\t{}",
            i,
            is_selected(dashboard, i) as u8,
            row.join("\t")
        );
    }
}

pub fn print_results_json(dashboard: &Dashboard) -> Result<()> {
    let column_labels = labels();
    let rows: Vec<Value> = dashboard
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut object = Map::new();
            object.insert("index".to_string(), Value::from(i));
            object.insert("selected".to_string(), Value::from(is_selected(dashboard, i)));
            for (label, cell) in column_labels.iter().zip(row) {
                object.insert(label.to_string(), Value::from(cell));
            }
            Value::Object(object)
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub fn print_summary(summary: &Summary) {
    for (title, counts) in [
        ("Consequence", &summary.consequences),
        ("IMPACT", &summary.impacts),
    ] {
        let mut builder = Builder::default();
        builder.push_record([title.to_string(), "Count".to_string()]);
        for (key, count) in counts {
            builder.push_record([key.clone(), count.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        println!("{}", table);
    }
    println!("Number of selected variants: {}", summary.total);
}
