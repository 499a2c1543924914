use crate::domain::models::booking::BookingSubmission;

const WA_BASE: &str = "https://wa.me/";
const COUNTRY_CODE: &str = "55";

/// Builds `https://wa.me/55<digits>?text=<message>` for a Brazilian number.
/// The message is percent-encoded, spaces as `%20`.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("{}{}{}?text={}", WA_BASE, COUNTRY_CODE, digits, urlencoding::encode(message))
}

pub fn confirmation_message(submission: &BookingSubmission) -> String {
    format!(
        "Olá! Gostaria de confirmar meu agendamento:\n\n\
         Serviço: {} ({} min)\n\
         Data: {}\n\
         Horário: {}\n\
         Nome: {}\n\
         E-mail: {}\n\
         Telefone: {}",
        submission.service.name,
        submission.service.duration_min,
        submission.date.format("%d/%m/%Y"),
        submission.time,
        submission.client.name.trim(),
        submission.client.email.trim(),
        submission.client.phone.trim(),
    )
}
