pub mod http_booking_webhook;
