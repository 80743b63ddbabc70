use super::render;
use crate::domain::model::GenerationRequest;

/// Literal target name checked before appending to an existing Makefile.
pub const PROTO_TARGET_MARKER: &str = "proto:";

const PROTO: &str = r#"syntax = "proto3";

package {name}.v1;

option go_package = "{module}";

service {name} {
}
"#;

const MAKEFILE: &str = r#"BINARY_NAME := {name}
SERVICE_NAME := {name}

.PHONY: proto build run test clean

proto:
	protoc --go_out=. --go_opt=paths=source_relative \
		--go-grpc_out=. --go-grpc_opt=paths=source_relative \
		api/proto/v1/*proto
	mv api/proto/v1/*.pb.go pkg/grpc/$(SERVICE_NAME)/v1

build:
	go build -o bin/$(BINARY_NAME) ./cmd/$(BINARY_NAME)

run: build
	./bin/$(BINARY_NAME)

test:
	go test -race -cover ./...

clean:
	rm -rf bin/
"#;

const MAKEFILE_PROTO_TARGET: &str = r#"
SERVICE_NAME := {name}

proto:
	protoc --go_out=. --go_opt=paths=source_relative \
		--go-grpc_out=. --go-grpc_opt=paths=source_relative \
		api/proto/v1/*proto
	mv api/proto/v1/*.pb.go pkg/grpc/$(SERVICE_NAME)/v1
"#;

pub fn proto(request: &GenerationRequest) -> String {
    render(PROTO, request)
}

pub fn makefile(request: &GenerationRequest) -> String {
    render(MAKEFILE, request)
}

pub fn makefile_proto_target(request: &GenerationRequest) -> String {
    render(MAKEFILE_PROTO_TARGET, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proto_contract() {
        let request = GenerationRequest::new("user", "github.com/org/user", ".");
        let proto = proto(&request);
        assert!(proto.contains("package user.v1;"));
        assert!(proto.contains("option go_package = \"github.com/org/user\";"));
        assert!(proto.contains("service user {"));
    }

    #[test]
    fn test_both_makefile_variants_carry_marker() {
        let request = GenerationRequest::new("user", "", ".");
        assert!(makefile(&request).contains(PROTO_TARGET_MARKER));
        assert!(makefile_proto_target(&request).contains(PROTO_TARGET_MARKER));
        assert!(makefile_proto_target(&request).contains("pkg/grpc/$(SERVICE_NAME)/v1"));
    }
}
