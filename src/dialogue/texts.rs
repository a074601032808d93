//! Bot message texts and button captions

use crate::models::{Order, OrderField, Quote, SubmittedOrder};
use crate::state::OrderStep;

pub const BTN_NEW_ORDER: &str = "📝 Новая заявка";
pub const BTN_HELP: &str = "🆘 Помощь";
pub const BTN_CALCULATOR: &str = "💰 Расчет стоимости";
pub const BTN_BEGIN_ORDER: &str = "🚚 Начать оформление";
pub const BTN_CONFIRM: &str = "✅ Подтвердить";
pub const BTN_CANCEL: &str = "❌ Отменить";

pub const WELCOME: &str = "🚛 Добро пожаловать в бот для грузоперевозок!\nВыберите действие:";

pub const ORDER_INFO: &str = "Для создания заявки потребуется указать следующие данные:\n\
    - Маркетплейс\n\
    - Склад разгрузки\n\
    - Необходимая дата разгрузки\n\
    - Адрес забора поставки\n\
    - Расстояние от МКАД\n\
    - Количество коробов\n\
    - ИП отправителя\n\
    - Контактный номер телефона отправителя\n\n\
    Нажмите '🚚 Начать оформление' чтобы продолжить";

pub const ORDER_CANCELLED: &str = "❌ Заявка отменена";

pub const CALC_BOX_COUNT_PROMPT: &str = "📦 Введите количество коробок:";
pub const CALC_NOT_A_NUMBER: &str = "❌ Пожалуйста, введите число!";
pub const CALC_DIMENSIONS_PROMPT: &str =
    "📏 Введите размер одной коробки в формате ДxШxВ (например, 30-20-15 см):";
pub const CALC_BAD_FORMAT: &str =
    "❌ Неправильный формат! Введите размер как ДxШxВ (например, 30x20x15)";

/// Longest field value copied into the operator notification, in chars.
/// Eight of them stay under the 4096 UTF-16 unit message limit even when
/// every char is a surrogate pair.
pub const MAX_SUMMARY_FIELD_CHARS: usize = 200;

pub fn help(support_phone: &str) -> String {
    format!(
        "📞 Контакты поддержки:\n\
         Если у вас возникли проблемы с ботом или у вас есть вопросы, \
         пожалуйста, свяжитесь с менеджером по номеру: {}",
        support_phone
    )
}

/// Question asked when the wizard enters `step`
pub fn prompt(step: OrderStep) -> &'static str {
    match step {
        OrderStep::AwaitMarketplace => "🛒 Выберите маркетплейс:",
        OrderStep::AwaitWarehouse => "🏭 Введите склад разгрузки (например, Склад №1):",
        OrderStep::AwaitDate => "📅 Введите дату разгрузки (в формате ГГГГ-ММ-ДД):",
        OrderStep::AwaitAddress => "🏠 Введите адрес забора доставки (например, ул. Ленина, д. 1):",
        OrderStep::AwaitDistance => "📍 Введите расстояние от МКАД (в км):",
        OrderStep::AwaitBoxes => "📦 Введите количество коробов:",
        OrderStep::AwaitSender => "👤 Введите ИП отправителя:",
        OrderStep::AwaitPhone => "📱 Введите контактный телефон отправителя:",
        OrderStep::Confirming => "Всё верно?",
    }
}

fn field_line(field: OrderField, value: &str) -> String {
    match field {
        OrderField::Marketplace => format!("🛒 Маркетплейс: {}", value),
        OrderField::Warehouse => format!("🏭 Склад: {}", value),
        OrderField::Date => format!("📅 Дата: {}", value),
        OrderField::Address => format!("🏠 Адрес: {}", value),
        OrderField::Distance => format!("📍 Расстояние: {} км", value),
        OrderField::Boxes => format!("📦 Коробки: {}", value),
        OrderField::Sender => format!("👤 ИП: {}", value),
        OrderField::Phone => format!("📱 Телефон: {}", value),
    }
}

fn field_lines(order: &Order, shorten: fn(&str) -> String) -> String {
    OrderField::ALL
        .iter()
        .map(|field| field_line(*field, &shorten(order.get(*field).unwrap_or(""))))
        .collect::<Vec<_>>()
        .join("\n")
}

fn verbatim(value: &str) -> String {
    value.to_string()
}

fn truncated(value: &str) -> String {
    match value.char_indices().nth(MAX_SUMMARY_FIELD_CHARS) {
        Some((cut, _)) => format!("{}…", &value[..cut]),
        None => value.to_string(),
    }
}

/// Summary shown to the customer before confirmation
pub fn confirmation(order: &Order) -> String {
    format!(
        "✅ Проверьте данные заявки:\n\n{}\n\n{}",
        field_lines(order, verbatim),
        prompt(OrderStep::Confirming)
    )
}

pub fn order_accepted(number: u16) -> String {
    format!(
        "🎉 Заявка #{} успешно оформлена!\n📞 С вами свяжется менеджер в ближайшее время.",
        number
    )
}

/// Notification sent to the operator chat
pub fn operator_summary(submitted: &SubmittedOrder) -> String {
    format!(
        "📌 Новая заявка #{}:\n👤 Клиент: @{}\n{}\n🕒 Оформлена: {}",
        submitted.number,
        submitted.client.as_deref().unwrap_or("N/A"),
        field_lines(&submitted.order, truncated),
        submitted.submitted_at.format("%Y-%m-%d %H:%M UTC")
    )
}

pub fn quote(quote: &Quote) -> String {
    format!(
        "📊 Расчет стоимости:\n\
         📦 Размер коробки: {} см\n\
         🧮 Объем: {} см³\n\
         💵 Предварительная стоимость: {} руб.",
        quote.dimensions, quote.volume_cm3, quote.cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::BoxDimensions;

    #[test]
    fn test_confirmation_lists_fields_in_order() {
        let mut order = Order::new();
        order.set(OrderField::Marketplace, "Ozon");
        order.set(OrderField::Distance, "15");

        let text = confirmation(&order);
        let marketplace = text.find("🛒 Маркетплейс: Ozon").unwrap();
        let distance = text.find("📍 Расстояние: 15 км").unwrap();
        assert!(marketplace < distance);
        assert!(text.ends_with("Всё верно?"));
    }

    #[test]
    fn test_operator_summary_without_username() {
        let submitted = SubmittedOrder {
            number: 4321,
            client: None,
            order: Order::new(),
            submitted_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        };

        let text = operator_summary(&submitted);
        assert!(text.starts_with("📌 Новая заявка #4321:"));
        assert!(text.contains("👤 Клиент: @N/A"));
        assert!(text.contains("🕒 Оформлена: 2024-05-01 09:30 UTC"));
    }

    #[test]
    fn test_operator_summary_fits_message_limit() {
        let mut order = Order::new();
        for field in OrderField::ALL {
            order.set(field, &"📦".repeat(4096));
        }
        let submitted = SubmittedOrder {
            number: 1000,
            client: Some("a".repeat(32)),
            order,
            submitted_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        };

        let text = operator_summary(&submitted);
        assert!(text.encode_utf16().count() <= 4096);
        assert_eq!(text.matches('…').count(), OrderField::ALL.len());
        assert!(text.ends_with("🕒 Оформлена: 2024-05-01 09:30 UTC"));
    }

    #[test]
    fn test_short_values_are_not_truncated() {
        let exact = "я".repeat(MAX_SUMMARY_FIELD_CHARS);
        assert_eq!(truncated(&exact), exact);
        assert_eq!(truncated(&format!("{}!", exact)), format!("{}…", exact));
    }

    #[test]
    fn test_confirmation_keeps_long_values() {
        let mut order = Order::new();
        let long = "Склад ".repeat(100);
        order.set(OrderField::Warehouse, &long);
        assert!(confirmation(&order).contains(&long));
    }

    #[test]
    fn test_quote_text() {
        let text = quote(&Quote {
            dimensions: BoxDimensions { length: 30, width: 20, height: 15 },
            volume_cm3: 9000,
            cost: 900000,
        });
        assert!(text.contains("30x20x15 см"));
        assert!(text.contains("9000 см³"));
        assert!(text.contains("900000 руб."));
    }
}
