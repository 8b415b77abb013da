use crate::quantity::QuantityError;

/// 습공기 계산 시 발생 가능한 오류.
///
/// 단위 불일치 외에는 습구온도 수렴 실패만 오류가 된다. 물리적으로 맞지 않는
/// 입력(상대습도 100 % 초과 등)은 검사하지 않고 그대로 계산한다.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PsychroError {
    /// 입력 단위를 기대 단위로 변환할 수 없음
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    /// 반복 한도 안에 허용오차를 만족하지 못함
    #[error("습구온도 계산이 수렴하지 않음: {iterations}회 갱신 후 습도비 잔차 {residual:.3e}")]
    NotConverged { iterations: u32, residual: f64 },
}
