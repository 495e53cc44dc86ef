use chrono::{Datelike, NaiveDate};

use crate::handlers::email_dtos::ContactRequest;

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

pub struct RequestMeta<'a> {
    pub received_on: NaiveDate,
    pub client_ip: Option<&'a str>,
}

/// "18 de octubre de 2026"
pub fn spanish_long_date(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), MONTHS_ES[date.month0() as usize], date.year())
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn subject(request: &ContactRequest) -> String {
    format!("✨ Nueva solicitud de {} - {}", request.name.trim(), request.plan.trim())
}

fn row(label: &str, value_html: &str) -> String {
    format!(
        r#"<tr>
  <td width="28%" style="vertical-align: top; padding-right: 15px; font-size: 14px; font-weight: 600; color: #546182;">{label}</td>
  <td style="vertical-align: top; font-size: 15px; font-weight: 500; color: #262d3d; padding-bottom: 5px; border-bottom: 1px solid #eaeef5;">{value_html}</td>
</tr>"#
    )
}

pub fn render_notification(request: &ContactRequest, meta: &RequestMeta<'_>) -> String {
    let name = escape_html(request.name.trim());
    let email = escape_html(request.email.trim());
    let company = escape_html(request.company.trim());
    let plan = escape_html(request.plan.trim());
    let message = escape_html(request.message.trim()).replace('\n', "<br>");

    let whatsapp = if request.whatsapp.trim().is_empty() {
        "No proporcionado".to_string()
    } else {
        let digits: String = request.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!(
            r#"<a href="https://wa.me/{}" style="text-decoration: none; color: #3a36db;">{}</a>"#,
            digits,
            escape_html(request.whatsapp.trim())
        )
    };

    let rows = [
        row("Nombre:", &name),
        row(
            "Email:",
            &format!(r#"<a href="mailto:{email}" style="text-decoration: none; color: #3a36db;">{email}</a>"#),
        ),
        row("Empresa:", &company),
        row("WhatsApp:", &whatsapp),
        row(
            "Plan de interés:",
            &format!(
                r#"<span style="display: inline-block; background-color: #e9efff; color: #3a36db; padding: 4px 12px; border-radius: 50px; font-size: 13px; font-weight: 600;">{plan}</span>"#
            ),
        ),
    ]
    .join("\n");

    let received = spanish_long_date(meta.received_on);
    let ip = escape_html(meta.client_ip.unwrap_or("No disponible"));
    let year = meta.received_on.year();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Nueva solicitud de contacto</title>
</head>
<body style="margin: 0; padding: 0; font-family: 'Poppins', Arial, sans-serif; background-color: #f7f9fc; color: #333333;">
  <table role="presentation" width="100%" cellspacing="0" cellpadding="0">
    <tr>
      <td style="padding: 40px 0;">
        <table role="presentation" width="100%" cellspacing="0" cellpadding="0" style="max-width: 650px; margin: 0 auto; background-color: #ffffff; border-radius: 12px;">
          <tr>
            <td style="padding: 35px 40px; text-align: center; background: linear-gradient(135deg, #3a36db 0%, #4c62df 100%); border-top-left-radius: 12px; border-top-right-radius: 12px;">
              <img src="https://hero-framer-studio.com/logo-white.png" alt="Hero&amp;Framer Studio" style="max-height: 60px; width: auto;" />
            </td>
          </tr>
          <tr>
            <td style="padding: 40px 40px 20px 40px;">
              <h1 style="margin: 0 0 20px 0; font-size: 24px; font-weight: 600; color: #262d3d;">Nueva solicitud de contacto</h1>
              <p style="margin: 0 0 30px 0; font-size: 16px; line-height: 24px; color: #546182;">
                Has recibido una nueva solicitud de contacto a través del formulario de la web. A continuación, se detallan los datos proporcionados:
              </p>
              <table role="presentation" width="100%" cellspacing="0" cellpadding="0" style="border-collapse: separate; border-spacing: 0 12px;">
{rows}
              </table>
              <div style="margin-top: 30px; background-color: #f9fafc; border-radius: 8px; padding: 25px; border-left: 4px solid #3a36db;">
                <h3 style="margin: 0 0 15px 0; font-size: 16px; font-weight: 600; color: #262d3d;">Mensaje:</h3>
                <p style="margin: 0; font-size: 15px; line-height: 24px; color: #546182;">{message}</p>
              </div>
              <div style="margin-top: 35px; text-align: center;">
                <a href="mailto:{email}" style="display: inline-block; background: #3a36db; color: #ffffff; font-size: 15px; font-weight: 600; text-decoration: none; padding: 14px 30px; border-radius: 6px;">Responder al contacto</a>
              </div>
            </td>
          </tr>
          <tr>
            <td style="padding: 0 40px 30px 40px;">
              <div style="background-color: #f9fafc; border-radius: 8px; padding: 20px; margin-top: 30px;">
                <p style="margin: 0; font-size: 14px; line-height: 22px; color: #546182;">
                  <strong style="color: #262d3d;">Fecha de recepción:</strong> {received}<br>
                  <strong style="color: #262d3d;">IP:</strong> {ip}<br>
                  <strong style="color: #262d3d;">Fuente:</strong> Formulario de contacto - hero-framer-studio.com
                </p>
              </div>
            </td>
          </tr>
          <tr>
            <td style="background-color: #f2f5fa; padding: 25px 40px; text-align: center; border-bottom-left-radius: 12px; border-bottom-right-radius: 12px;">
              <p style="margin: 0 0 10px 0; font-size: 14px; color: #546182;">© {year} Hero&amp;Framer Studio. Todos los derechos reservados.</p>
              <p style="margin: 0; font-size: 13px; color: #8795af;">
                <a href="https://hero-framer-studio.com" style="color: #3a36db; text-decoration: none;">hero-framer-studio.com</a>
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ana García".to_string(),
            email: "ana@example.com".to_string(),
            company: "Acme <Labs>".to_string(),
            whatsapp: "+56 9 1234 5678".to_string(),
            plan: "grow".to_string(),
            message: "Hola\nnecesito una landing".to_string(),
        }
    }

    fn meta() -> RequestMeta<'static> {
        RequestMeta {
            received_on: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            client_ip: Some("203.0.113.9"),
        }
    }

    #[test]
    fn formats_dates_in_spanish() {
        assert_eq!(spanish_long_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), "5 de enero de 2025");
        assert_eq!(spanish_long_date(meta().received_on), "18 de octubre de 2026");
    }

    #[test]
    fn notification_carries_every_field_escaped() {
        let html = render_notification(&request(), &meta());
        assert!(html.contains("Ana García"));
        assert!(html.contains("mailto:ana@example.com"));
        assert!(html.contains("Acme &lt;Labs&gt;"));
        assert!(!html.contains("Acme <Labs>"));
        assert!(html.contains("https://wa.me/56912345678"));
        assert!(html.contains("Hola<br>necesito una landing"));
        assert!(html.contains("18 de octubre de 2026"));
        assert!(html.contains("203.0.113.9"));
        assert!(html.contains("© 2026"));
    }

    #[test]
    fn missing_whatsapp_and_ip_have_placeholders() {
        let request = ContactRequest { whatsapp: String::new(), ..request() };
        let meta = RequestMeta { client_ip: None, ..meta() };
        let html = render_notification(&request, &meta);
        assert!(html.contains("No proporcionado"));
        assert!(html.contains("No disponible"));
    }

    #[test]
    fn subject_names_sender_and_plan() {
        assert_eq!(subject(&request()), "✨ Nueva solicitud de Ana García - grow");
    }
}
