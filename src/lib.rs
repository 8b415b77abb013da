//! 습공기(psychrometric) 상태량 계산 라이브러리.
//!
//! 핵심 계산식은 `air`에 있고, `quantity`/`units`가 단위 태그와 환산을 맡는다.
//! CLI 관련 모듈(`app`, `cli`, `config`, `logging`)도 라이브러리에 두어 테스트에서 쓸 수 있게 한다.

pub mod air;
pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod logging;
pub mod quantity;
pub mod units;

pub use air::PsychroError;
pub use quantity::{Quantity, QuantityError, QuantityKind, Unit};
