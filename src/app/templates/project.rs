use super::render;
use crate::domain::model::GenerationRequest;

const MAIN_GO: &str = r#"package main

import (
	"context"
	"flag"
	"log"
	"os/signal"
	"syscall"

	"{module}/internal/config"
	"github.com/s4bb4t/zapang/pkg/logger"
	"go.uber.org/zap"
)

const (
	serviceName = "{name}"
)

var (
	cfgPath = flag.String("cfg", "./config.yaml", "Config file path")
)

func main() {
	ctx, cancel := signal.NotifyContext(context.Background(), syscall.SIGINT, syscall.SIGTERM)
	defer cancel()

	flag.Parse()
	cfg, err := config.Load(*cfgPath)
	if err != nil {
		log.Fatalf("load config: %s", err)
	}

	l := logger.New(ctx, serviceName, cfg.Logger, nil)
	defer l.Sync()

	l.Info("starting service",
		zap.String("service", serviceName),
		logger.Environment(cfg.Logger.Environment),
	)

	if err := start(ctx, cfg, l); err != nil {
		l.Fatal("failed to start application", zap.Error(err))
	}
}

func start(ctx context.Context, cfg config.Config, log *logger.Logger) error {
	<-ctx.Done()
	log.Info("shutting down gracefully")
	return nil
}
"#;

const CONFIG_GO: &str = r#"package config

import (
	"os"

	"github.com/go-faster/errors"
	"github.com/s4bb4t/zapang/pkg/logger"
	"gopkg.in/yaml.v3"
)

type (
	Config struct {
		Otel   OpenTelemetry `yaml:"otel"`
		Logger logger.Config `yaml:"logger"`
	}
)

func Load(configPath string) (Config, error) {
	var cfg Config

	file, err := os.Open(configPath)
	if err != nil {
		return cfg, errors.Wrap(err, "open config file")
	}
	defer file.Close()

	if err := yaml.NewDecoder(file).Decode(&cfg); err != nil {
		return cfg, errors.Wrap(err, "parse config file")
	}

	return cfg, nil
}
"#;

const OTEL_GO: &str = r#"package config

type OpenTelemetry struct {
	CollectorPath string `yaml:"collector_path"`
	ServiceName   string `yaml:"service_name"`
}
"#;

const DOCKERFILE: &str = r#"FROM golang:1.23-alpine AS builder

WORKDIR /app

COPY go.mod go.sum ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=0 GOOS=linux go build -ldflags="-s -w" -o /bin/{name} ./cmd/{name}

FROM alpine:3.19

RUN apk --no-cache add ca-certificates
COPY --from=builder /bin/{name} /bin/{name}

ENTRYPOINT ["/bin/{name}"]
"#;

const GITIGNORE: &str = r#"# Binaries
bin/
*.exe
*.dll
*.so
*.dylib

# Test
*.test
coverage.out
coverage.html

# IDE
.idea/
.vscode/
*.swp
*.swo

# Environment
.env
.env.local

# OS
.DS_Store
Thumbs.db

# Build
dist/
"#;

const MAKEFILE: &str = r#"BINARY_NAME := {name}
VERSION ?= $(shell git describe --tags --always --dirty 2>/dev/null || echo "dev")

.PHONY: build run test lint clean docker

build:
	go build -ldflags="-s -w" -o bin/$(BINARY_NAME) ./cmd/{name}

run: build
	./bin/$(BINARY_NAME)

test:
	go test -race -cover ./...

lint:
	golangci-lint run

clean:
	rm -rf bin/

docker:
	docker build -t $(BINARY_NAME):$(VERSION) -f deploy/docker/Dockerfile .
"#;

pub fn main_go(request: &GenerationRequest) -> String {
    render(MAIN_GO, request)
}

pub fn config_go(request: &GenerationRequest) -> String {
    render(CONFIG_GO, request)
}

pub fn otel_go(request: &GenerationRequest) -> String {
    render(OTEL_GO, request)
}

pub fn dockerfile(request: &GenerationRequest) -> String {
    render(DOCKERFILE, request)
}

pub fn gitignore(request: &GenerationRequest) -> String {
    render(GITIGNORE, request)
}

pub fn makefile(request: &GenerationRequest) -> String {
    render(MAKEFILE, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_go_imports_module_config() {
        let request = GenerationRequest::new("demo", "github.com/org/demo", "demo");
        let main = main_go(&request);
        assert!(main.contains("\"github.com/org/demo/internal/config\""));
        assert!(main.contains("serviceName = \"demo\""));
        assert!(!main.contains("{module}"));
    }

    #[test]
    fn test_dockerfile_and_makefile_use_binary_name() {
        let request = GenerationRequest::new("demo", "", "demo");
        assert!(dockerfile(&request).contains("ENTRYPOINT [\"/bin/demo\"]"));
        let makefile = makefile(&request);
        assert!(makefile.starts_with("BINARY_NAME := demo\n"));
        assert!(makefile.contains("./cmd/demo"));
        // project Makefile has no proto target, `project grpc` appends one later
        assert!(!makefile.contains("proto:"));
    }
}
