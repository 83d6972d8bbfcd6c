//! 공통 유틸리티 모듈

pub mod product_utils;
