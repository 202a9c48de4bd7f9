use sustainvec_core::EmbeddingError;
use sustainvec_embeddings::EmbeddingProviderError;

#[test]
fn transport_failures_become_provider_errors() {
    let err: EmbeddingError = EmbeddingProviderError::Transport("upstream timeout".to_string()).into();
    assert!(matches!(&err, EmbeddingError::Provider(message) if message == "upstream timeout"));
}

#[test]
fn shape_problems_become_invalid_responses() {
    let err: EmbeddingError = EmbeddingProviderError::Dimension {
        index: 2,
        expected: 1536,
        got: 3,
    }
    .into();
    assert_eq!(
        err.to_string(),
        "Embedding invalid response: vector 2 has dimension 3, index expects 1536"
    );

    let err: EmbeddingError = EmbeddingProviderError::CountMismatch {
        requested: 2,
        received: 1,
    }
    .into();
    assert!(matches!(err, EmbeddingError::InvalidResponse(message) if message.contains("asked for 2")));
}
