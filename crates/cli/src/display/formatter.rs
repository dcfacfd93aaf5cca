use gradle_task_core::GradleProperty;

pub fn print_properties_table() {
    println!("{:<24} {:<10} {}", "PROPERTY", "DEFAULT", "OPTION");
    println!("{}", "=".repeat(48));
    for property in GradleProperty::ALL {
        println!(
            "{:<24} {:<10} {}",
            property.key(),
            property.default_value().unwrap_or("-"),
            property.option().unwrap_or("-")
        );
    }
}
