use senusa_dashboard::columns::labels;

pub fn run_columns() {
    for label in labels() {
        println!("{}", label);
    }
}
