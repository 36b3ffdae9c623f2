use mock_tensor::{CudaArray, DType, MockTensor, MockTensorError, Shape, MOCK_DEVICE};

#[test]
fn construction_populates_all_descriptor_fields() {
    let tensor = MockTensor::new([512, 128], DType::F16);
    assert_eq!(tensor.shape().dims(), &[512, 128]);
    assert_eq!(tensor.dtype(), DType::F16);
    assert_eq!(tensor.dtype_name(), "float16");
    assert_eq!(tensor.dtype_handle().name(), "float16");
    assert_eq!(tensor.device(), "cuda");
    assert_eq!(tensor.data_ptr(), 0);
}

#[test]
fn default_dtype_is_float32() {
    let tensor = MockTensor::with_defaults([8, 8]);
    assert_eq!(tensor.dtype(), DType::F32);
    assert_eq!(tensor.cuda_array_interface().typestr(), "<f4");
}

#[test]
fn from_dtype_name_accepts_every_supported_identifier() {
    for dtype in DType::ALL {
        let tensor = MockTensor::from_dtype_name([2, 2], dtype.name())
            .unwrap_or_else(|err| panic!("unexpected error: {err}"));
        assert_eq!(tensor.dtype(), dtype);
    }
}

#[test]
fn from_dtype_name_rejects_unknown_dtype() {
    let err = MockTensor::from_dtype_name([4, 4], "bfloat16")
        .expect_err("bfloat16 is outside the supported set");
    assert_eq!(
        err,
        MockTensorError::UnsupportedDType {
            dtype: "bfloat16".to_string()
        }
    );
    assert!(err.to_string().contains("bfloat16"));
}

#[test]
fn scalar_construction_succeeds() {
    let tensor = MockTensor::new(Shape::scalar(), DType::F32);
    assert_eq!(tensor.shape().rank(), 0);
    assert_eq!(tensor.num_elements(), 1);
    assert_eq!(tensor.byte_len(), Some(4));
}

#[test]
fn zero_sized_dimension_is_kept_as_given() {
    let tensor = MockTensor::new([3, 0, 5], DType::I8);
    assert_eq!(tensor.shape().dims(), &[3, 0, 5]);
    assert_eq!(tensor.num_elements(), 0);
    assert_eq!(tensor.byte_len(), Some(0));
}

#[test]
fn byte_len_scales_with_element_size() {
    assert_eq!(MockTensor::new([16], DType::U8).byte_len(), Some(16));
    assert_eq!(MockTensor::new([16], DType::F64).byte_len(), Some(128));
}

#[test]
fn byte_len_reports_overflow_as_none() {
    let tensor = MockTensor::new([usize::MAX, 2], DType::F32);
    assert_eq!(tensor.byte_len(), None);
}

#[test]
fn accessors_are_idempotent() {
    let tensor = MockTensor::new([6, 7], DType::I64);
    assert_eq!(tensor.shape(), tensor.shape());
    assert_eq!(tensor.dtype(), tensor.dtype());
    assert_eq!(tensor.data_ptr(), tensor.data_ptr());
    assert_eq!(tensor.device(), tensor.device());
    assert_eq!(
        tensor.cuda_array_interface(),
        tensor.cuda_array_interface()
    );
}

#[test]
fn device_tag_is_the_module_constant() {
    assert_eq!(MOCK_DEVICE, "cuda");
    assert_eq!(MockTensor::with_defaults([1]).device(), MOCK_DEVICE);
}

#[test]
fn clone_is_an_independent_equal_value() {
    let tensor = MockTensor::new([5, 5], DType::U16);
    let copy = tensor.clone();
    assert_eq!(tensor, copy);
    assert_eq!(
        copy.cuda_array_interface(),
        tensor.cuda_array_interface()
    );
}

#[test]
fn mock_tensor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MockTensor>();
}
