use crate::models::MeetingNotice;

pub const MEETING_SENDER_NAME: &str = "Cita Médica";
pub const APPOINTMENT_SUBJECT: &str = "Detalles de tu cita médica";
pub const RESCHEDULE_SUBJECT: &str = "Reprogramación de tu cita médica";
pub const PRESCRIPTION_SENDER_NAME: &str = "Receta Medica";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; color: #333; background-color: #f9f9f9; padding: 20px; }
    .container { max-width: 600px; margin: auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.05); }
    .header { font-size: 24px; font-weight: bold; margin-bottom: 20px; }
    .reuma { color: #aece57; }
    .sur { color: #2a43d2; }
    .signature { margin-top: 30px; font-size: 14px; color: #555; }
    .footer { font-size: 12px; color: #777; border-top: 1px solid #eee; margin-top: 30px; padding-top: 10px; }
    a { color: #2a43d2; text-decoration: none; }
"#;

const SIGNATURE: &str = r#"
      <p>Si tiene alguna pregunta o necesita mayor información, no dude en comunicarse con nosotros.</p>
      <br>
      <p>Saludos cordiales,</p>
      <div class="signature">
        <strong>Reumasur</strong><br>
        Centro Reumatológico<br>
        Dir: Bocayá el Colón y Tarqui (Centro de Diagnóstico CEDIAG)<br>
        Machala - El Oro, Ecuador<br>
        Tel: 0980304357<br>
        Email: <a href="mailto:emilio_aroca@yahoo.com">emilio_aroca@yahoo.com</a>
      </div>
      <div class="footer">
        Este mensaje es confidencial y está dirigido únicamente al destinatario. Si ha recibido este mensaje por error, por favor elimínelo de inmediato y notifique al remitente.
      </div>"#;

pub fn prescription_subject(patient_name: &str) -> String {
    format!("Receta Medica de {}", patient_name)
}

pub fn prescription_filename(patient_name: &str) -> String {
    format!("Receta-{}.pdf", patient_name)
}

pub fn appointment_email(notice: &MeetingNotice) -> String {
    let join_url = escape_html(&notice.join_url);
    let content = format!(
        r#"<p>Estimado/a Usuario,</p>
      <h3>Tu cita ha sido agendada correctamente</h3>
      <p>Adjunto a este correo encontrará su Link de la reunión: <a href="{join_url}">Unirse a la reunión de Zoom</a>.</p>
      <p>Fecha y Hora: {when} ({offset})</p>
      {converter}"#,
        join_url = join_url,
        when = notice.schedule.when_local,
        offset = notice.schedule.offset_label,
        converter = converter_paragraph(&notice.schedule.converter_url),
    );
    layout(&content)
}

pub fn reschedule_email(notice: &MeetingNotice) -> String {
    let join_url = escape_html(&notice.join_url);
    let content = format!(
        r#"<p>Estimado/a su cita medica ha sido reagendado correctamente,</p>
      <p><strong>Nueva Fecha y Hora:</strong> {when} ({offset})</p>
      <p>Link de la reunión: <a href="{join_url}">Unirse a la reunión de Zoom</a></p>
      {converter}"#,
        join_url = join_url,
        when = notice.schedule.when_local,
        offset = notice.schedule.offset_label,
        converter = converter_paragraph(&notice.schedule.converter_url),
    );
    layout(&content)
}

pub fn prescription_email(patient_name: &str) -> String {
    let content = format!(
        r#"<p>Estimado/a <strong>{}</strong>,</p>
      <p>Adjunto a este correo encontrará su receta médica en formato PDF. Por favor, revise el documento cuidadosamente.</p>"#,
        escape_html(patient_name)
    );
    layout(&content)
}

fn converter_paragraph(converter_url: &str) -> String {
    format!(
        r#"<p><strong>Convertidor horario:</strong> <a href="{}" target="_blank">Ver en mi zona horaria</a></p>"#,
        escape_html(converter_url)
    )
}

fn layout(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>{STYLE}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <span class="reuma">Reuma</span><span class="sur">sur</span>
    </div>
      {content}
{SIGNATURE}
  </div>
</body>
</html>
"#
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::schedule::LocalSchedule;
    use chrono::{TimeZone, Utc};

    fn notice() -> MeetingNotice {
        MeetingNotice {
            to: "paciente@example.com".to_string(),
            join_url: "https://zoom.us/j/123?pwd=a&b".to_string(),
            schedule: LocalSchedule::new(
                Utc.with_ymd_and_hms(2024, 10, 30, 10, 0, 0).unwrap(),
                chrono_tz::America::Guayaquil,
            ),
        }
    }

    #[test]
    fn test_appointment_email_contents() {
        let html = appointment_email(&notice());

        assert!(html.contains("Tu cita ha sido agendada correctamente"));
        assert!(html.contains(r#"href="https://zoom.us/j/123?pwd=a&amp;b""#));
        assert!(html.contains("Fecha y Hora: miércoles, 30 de octubre de 2024, 05:00 a. m. (GMT-05:00)"));
        assert!(html.contains("converter.html?iso=20241030T100000&amp;p1=1440"));
        assert!(html.contains("Centro Reumatológico"));
    }

    #[test]
    fn test_reschedule_email_contents() {
        let html = reschedule_email(&notice());

        assert!(html.contains("ha sido reagendado correctamente"));
        assert!(html.contains("<strong>Nueva Fecha y Hora:</strong> miércoles, 30 de octubre de 2024"));
        assert!(html.contains("Unirse a la reunión de Zoom"));
    }

    #[test]
    fn test_prescription_email_escapes_patient_name() {
        let html = prescription_email("Ana <b>Pérez</b>");

        assert!(html.contains("<strong>Ana &lt;b&gt;Pérez&lt;/b&gt;</strong>"));
        assert_eq!(prescription_subject("Ana Pérez"), "Receta Medica de Ana Pérez");
        assert_eq!(prescription_filename("Ana Pérez"), "Receta-Ana Pérez.pdf");
    }
}
