//! # 상품 가격 유틸리티
//!
//! 상품 가격 계산과 관련된 공통 유틸리티 함수들입니다.

use crate::core::errors::AppError;

/// 할인율을 적용한 가격 계산
///
/// 퍼센트 단위의 할인율을 적용한 최종 가격을 반환합니다.
///
/// # 인자
/// * `price` - 원래 가격
/// * `discount_percent` - 할인율 (0~100 퍼센트)
///
/// # 반환값
/// * `Ok(f64)` - 할인 적용 가격
/// * `Err(AppError)` - 가격 또는 할인율이 음수인 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::product_utils::discounted_price;
///
/// assert_eq!(discounted_price(100.0, 20.0).unwrap(), 80.0);
/// ```
pub fn discounted_price(price: f64, discount_percent: f64) -> Result<f64, AppError> {
    if price < 0.0 || discount_percent < 0.0 {
        return Err(AppError::ValidationError(
            "price and discount cannot be negative".to_string(),
        ));
    }

    Ok(price - price * discount_percent / 100.0)
}
