/// The two parties of the simulated WhatsApp conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    /// A prospective client of the law firm.
    Client,
    /// The firm's AI assistant.
    Assistant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub sender: Sender,
    pub text: &'static str,
}

const fn client(text: &'static str) -> TranscriptMessage {
    TranscriptMessage { sender: Sender::Client, text }
}

const fn assistant(text: &'static str) -> TranscriptMessage {
    TranscriptMessage { sender: Sender::Assistant, text }
}

pub const TRANSCRIPT: &[TranscriptMessage] = &[
    client("Boa noite, preciso de ajuda com uma questão trabalhista"),
    assistant("Boa noite! Sou a assistente jurídica do escritório Vaz & Coelho. Posso te ajudar com sua questão trabalhista. Pode me contar mais detalhes sobre o que aconteceu?"),
    client("Fui demitido sem justa causa após 3 anos..."),
    assistant("Entendo sua situação. Na demissão sem justa causa, você tem direito a: aviso prévio, 13º proporcional, férias vencidas + 1/3, saldo FGTS + multa 40%. Gostaria de agendar uma consulta com o Dr. Vaz?"),
    client("Sim, por favor"),
    assistant("Perfeito! Temos horários disponíveis amanhã às 10h ou 14h. Qual prefere?"),
    assistant("Agendamento confirmado para amanhã às 14h. Você receberá um lembrete 1h antes."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_opens_with_client_and_closes_with_assistant() {
        assert_eq!(TRANSCRIPT.first().map(|m| m.sender), Some(Sender::Client));
        assert_eq!(TRANSCRIPT.last().map(|m| m.sender), Some(Sender::Assistant));
        assert!(TRANSCRIPT.iter().all(|m| !m.text.trim().is_empty()));
    }
}
