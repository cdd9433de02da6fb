use carlot::api::{CmdMessage, MessageLevel};
use carlot::model::Car;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 32;
const PRICE_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_cars(cars: &[Car]) {
    for car in cars {
        let name = truncate_to_width(&format!("{} {}", car.brand, car.model), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let price = format!("{:>width$.2}", car.price_per_day, width = PRICE_WIDTH);

        let status = if car.available {
            "available".green()
        } else {
            format!("rented by {}", car.rented_by).yellow()
        };

        println!(
            "{}{}{}{}/day  {}",
            format!("{:<width$}", car.car_id, width = ID_WIDTH).bold(),
            name,
            " ".repeat(padding),
            price,
            status
        );
    }
}

pub(super) fn print_car(car: &Car) {
    println!("{} {} {}", car.car_id.yellow(), car.brand.bold(), car.model.bold());
    println!("--------------------------------");
    println!("Price/day: {:.2}", car.price_per_day);
    println!("Image:     {}", car.image_url);
    if car.available {
        println!("Status:    {}", "available".green());
    } else {
        println!("Status:    {}", format!("rented by {}", car.rented_by).yellow());
    }
}

pub(super) fn print_total(total: f64) {
    println!("Total: {}", format!("{:.2}", total).bold());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
