//! Test doubles for the [`Llm`](crate::port::outbound::llm::Llm) port.
