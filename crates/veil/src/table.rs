use veil_core::cursor::BackendInfo;

pub fn print_backends_table(backends: &[BackendInfo], active: &str) {
    let name_width = backends
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max("Backend".len());
    let display_width = backends
        .iter()
        .map(|b| b.display_name.len())
        .max()
        .unwrap_or(11)
        .max("Description".len());

    println!(
        "  {:<name_width$}  {:<display_width$}  {:<9}  {:<10}",
        "Backend", "Description", "Available", "Background"
    );
    for backend in backends {
        let marker = if backend.name == active { "*" } else { " " };
        println!(
            "{} {:<name_width$}  {:<display_width$}  {:<9}  {:<10}",
            marker,
            backend.name,
            backend.display_name,
            yes_no(backend.available),
            yes_no(backend.background_hide),
        );
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
